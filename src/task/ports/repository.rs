//! Repository port for task persistence and category lookup.

use crate::task::domain::{Category, CategoryId, Task, TaskId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Predicate used to select stored tasks.
pub type TaskPredicate = dyn Fn(&Task) -> bool + Send + Sync;

/// Task persistence contract.
///
/// The repository is the only component that performs persistence I/O.
/// Implementations must surface infrastructure failures as
/// [`TaskRepositoryError`] values rather than panicking.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Makes every given task durable.
    ///
    /// Returns the stored tasks carrying storage-assigned identifiers, in
    /// input order, one per input task. Categories without an identifier are
    /// persisted alongside the tasks that reference them; tasks in one batch
    /// that share an equal unsaved category end up sharing one stored
    /// category.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::AlreadyPersisted`] for tasks that
    /// already carry an identifier, [`TaskRepositoryError::UnknownCategory`]
    /// when a referenced category identifier does not exist, or
    /// [`TaskRepositoryError::Persistence`] when the store rejects the write.
    async fn include_tasks(&self, tasks: &[Task]) -> TaskRepositoryResult<Vec<Task>>;

    /// Returns every stored task that satisfies `predicate`.
    ///
    /// No ordering is guaranteed beyond the store's natural order.
    async fn find_tasks(&self, predicate: &TaskPredicate) -> TaskRepositoryResult<Vec<Task>>;

    /// Finds a category by identifier.
    ///
    /// Returns `None` when the category does not exist.
    async fn category_by_id(&self, id: CategoryId) -> TaskRepositoryResult<Option<Category>>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// A task passed for inclusion already has a storage identifier.
    #[error("task {0} has already been persisted")]
    AlreadyPersisted(TaskId),

    /// A task references a category identifier storage does not know.
    #[error("unknown category: {0}")]
    UnknownCategory(CategoryId),

    /// Storage accepted a write but did not hand back the stored task.
    #[error("storage returned no task for the insert")]
    NotStored,

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
