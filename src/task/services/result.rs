//! Outcome value returned by command handlers.

/// Result of executing a command.
///
/// `is_success` is `false` whenever execution hit an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    is_success: bool,
    message: Option<String>,
}

impl CommandResult {
    /// Creates a successful result without a message.
    #[must_use]
    pub const fn success() -> Self {
        Self {
            is_success: true,
            message: None,
        }
    }

    /// Creates a failed result carrying a human-readable message.
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            is_success: false,
            message: Some(message.into()),
        }
    }

    /// Returns whether the command succeeded.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.is_success
    }

    /// Returns the optional outcome message.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
