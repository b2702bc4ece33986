//! Mock UI implementation for testing.
//!
//! `MockUI` captures every interaction for later assertion and answers
//! confirmations from a queue.
//!
//! # Example
//!
//! ```
//! use roofline::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.queue_confirm(true);
//!
//! ui.message("2 favorites");
//! assert!(ui.confirm("Clear all favorites?", false).unwrap());
//!
//! assert!(ui.has_message("2 favorites"));
//! assert_eq!(ui.confirmations(), ["Clear all favorites?"]);
//! ```

use std::collections::VecDeque;

use crate::error::Result;

use super::{OutputMode, SpinnerHandle, UserInterface};

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    interactive: bool,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    headers: Vec<String>,
    spinners: Vec<String>,
    confirmations: Vec<String>,
    confirm_answers: VecDeque<bool>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Queue the answer to the next `confirm` call.
    ///
    /// Once the queue is empty, `confirm` returns the caller's default.
    pub fn queue_confirm(&mut self, answer: bool) {
        self.confirm_answers.push_back(answer);
    }

    /// Set whether this mock behaves as interactive.
    pub fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn spinners(&self) -> &[String] {
        &self.spinners
    }

    /// Questions passed to `confirm`, in order.
    pub fn confirmations(&self) -> &[String] {
        &self.confirmations
    }

    /// Check if any message contains `msg`.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    pub fn has_success(&self, msg: &str) -> bool {
        self.successes.iter().any(|m| m.contains(msg))
    }

    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(msg))
    }

    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }

    /// All message lines joined, for assertions on rendered tables.
    pub fn output(&self) -> String {
        self.messages.join("\n")
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        self.spinners.push(message.to_string());
        Box::new(MockSpinner::default())
    }

    fn confirm(&mut self, question: &str, default: bool) -> Result<bool> {
        self.confirmations.push(question.to_string());
        Ok(self.confirm_answers.pop_front().unwrap_or(default))
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }
}

/// Spinner that records how it finished.
#[derive(Debug, Default)]
pub struct MockSpinner {
    pub message: String,
    pub finished: Option<std::result::Result<String, String>>,
}

impl SpinnerHandle for MockSpinner {
    fn set_message(&mut self, msg: &str) {
        self.message = msg.to_string();
    }

    fn finish_success(&mut self, msg: &str) {
        self.finished = Some(Ok(msg.to_string()));
    }

    fn finish_error(&mut self, msg: &str) {
        self.finished = Some(Err(msg.to_string()));
    }

    fn finish_clear(&mut self) {
        self.finished = Some(Ok(String::new()));
    }
}
