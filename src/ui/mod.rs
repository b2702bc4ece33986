//! Terminal user interface.
//!
//! This module provides:
//! - [`UserInterface`] trait so commands can be driven by a mock in tests
//! - [`TerminalUI`] for interactive terminals
//! - [`NonInteractiveUI`] for pipes and scripts
//! - Spinners and tables
//!
//! # Example
//!
//! ```
//! use roofline::ui::{create_ui, OutputMode};
//!
//! let mut ui = create_ui(false, OutputMode::Quiet);
//! ui.show_header("Favorites");
//! ui.success("Saved");
//! ```

pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod spinner;
pub mod table;
pub mod terminal;
pub mod theme;

pub use mock::{MockSpinner, MockUI};
pub use non_interactive::NonInteractiveUI;
pub use output::OutputMode;
pub use spinner::ProgressSpinner;
pub use table::Table;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, RooflineTheme};

/// Trait for user interface interactions.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Show a header/banner.
    fn show_header(&mut self, title: &str);

    /// Start a spinner for a network call.
    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle>;

    /// Ask a yes/no question. Non-interactive UIs answer with `default`.
    fn confirm(&mut self, question: &str, default: bool) -> crate::Result<bool>;

    /// Check if running in interactive mode.
    fn is_interactive(&self) -> bool;
}

/// Handle for controlling a spinner.
pub trait SpinnerHandle {
    /// Update the spinner message.
    fn set_message(&mut self, msg: &str);

    /// Mark the operation as successful.
    fn finish_success(&mut self, msg: &str);

    /// Mark the operation as failed.
    fn finish_error(&mut self, msg: &str);

    /// Remove the spinner without a final line.
    fn finish_clear(&mut self);
}
