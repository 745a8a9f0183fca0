//! `tracing`-backed implementation of the logging port.

use crate::task::{error::RegistrationError, ports::TaskLogger};

/// Forwards handler log entries to the `tracing` subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingTaskLogger;

impl TracingTaskLogger {
    /// Creates a new logger.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl TaskLogger for TracingTaskLogger {
    fn debug(&self, message: &str) {
        tracing::debug!(target: "taskbook::registration", "{message}");
    }

    fn error(&self, message: &str, error: &RegistrationError) {
        tracing::error!(
            target: "taskbook::registration",
            error = %error,
            validation = error.is_validation(),
            "{message}"
        );
    }
}
