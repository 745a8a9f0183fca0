//! Error types for task domain validation.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTaskTitle,

    /// The category name is empty after trimming.
    #[error("category name must not be empty")]
    EmptyCategoryName,

    /// The registration request did not carry a resolved category.
    #[error("task category could not be resolved")]
    UnresolvedCategory,

    /// The task identifier is not a positive integer.
    #[error("invalid task identifier {0}, expected a positive integer")]
    InvalidTaskId(i64),

    /// The category identifier is not a positive integer.
    #[error("invalid category identifier {0}, expected a positive integer")]
    InvalidCategoryId(i64),
}
