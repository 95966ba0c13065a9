//! User-facing acknowledgments.
//!
//! A [`Notifier`] delivers the blocking confirmations the component shows
//! after a successful submit or schema copy. Failures are not acknowledged;
//! they go to the diagnostic log instead.

use std::sync::Mutex;

use tracing::info;

/// Acknowledgment shown after a successful submit.
pub const SUBMITTED_MESSAGE: &str = "Form submitted successfully!";
/// Acknowledgment shown after the schema reached the clipboard.
pub const SCHEMA_COPIED_MESSAGE: &str = "Form schema copied to clipboard!";

/// Delivers acknowledgments to the user.
pub trait Notifier: Send + Sync {
    /// Shows one acknowledgment.
    fn acknowledge(&self, message: &str);
}

/// Logs acknowledgments at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn acknowledge(&self, message: &str) {
        info!(message, "acknowledged");
    }
}

/// Records acknowledgments in memory.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every acknowledgment shown so far.
    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .map(|m| m.clone())
            .unwrap_or_default()
    }
}

impl Notifier for RecordingNotifier {
    fn acknowledge(&self, message: &str) {
        if let Ok(mut messages) = self.messages.lock() {
            messages.push(message.to_string());
        }
    }
}
