//! Plain UI for pipes, scripts and CI.

use crate::error::Result;

use super::{OutputMode, ProgressSpinner, SpinnerHandle, UserInterface};

/// UI implementation for non-interactive mode.
///
/// Writes undecorated lines, never animates, and answers every
/// confirmation with its default.
pub struct NonInteractiveUI {
    mode: OutputMode,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        println!("{}", msg);
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("✓ {}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("⚠ {}", msg);
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            println!("{}", title);
        }
    }

    fn start_spinner(&mut self, _message: &str) -> Box<dyn SpinnerHandle> {
        Box::new(ProgressSpinner::hidden())
    }

    fn confirm(&mut self, question: &str, default: bool) -> Result<bool> {
        tracing::debug!("Non-interactive, answering '{}' with {}", question, default);
        Ok(default)
    }

    fn is_interactive(&self) -> bool {
        false
    }
}
