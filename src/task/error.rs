//! Errors raised while registering a task.

use crate::task::{domain::TaskDomainError, ports::TaskRepositoryError};
use thiserror::Error;

/// Failure kinds the registration handler distinguishes.
#[derive(Debug, Clone, Error)]
pub enum RegistrationError {
    /// The command could not be turned into a valid task.
    #[error("invalid task registration: {0}")]
    Validation(#[from] TaskDomainError),

    /// Storage rejected or failed the write.
    #[error("task persistence failed: {0}")]
    Repository(#[from] TaskRepositoryError),
}

impl RegistrationError {
    /// Returns `true` when the failure was caused by the command itself.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
