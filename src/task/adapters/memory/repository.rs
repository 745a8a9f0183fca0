//! In-memory task repository.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{Category, CategoryId, Task, TaskId},
    ports::{TaskPredicate, TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
///
/// Identifiers are assigned sequentially starting at 1. Unsaved categories
/// are stored alongside the first task that references them; later tasks in
/// the same batch carrying an equal unsaved category reuse that entry.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: Vec<Task>,
    categories: BTreeMap<CategoryId, Category>,
    last_task_id: i64,
    last_category_id: i64,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a category and returns it with its identifier.
    ///
    /// A category that already carries an identifier is stored under it,
    /// replacing any previous entry.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] if the repository lock
    /// is poisoned.
    pub fn add_category(&self, category: &Category) -> TaskRepositoryResult<Category> {
        let mut state = self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let stored = match category.id() {
            Some(id) => {
                state.last_category_id = state.last_category_id.max(id.value());
                category.clone()
            }
            None => {
                let id = next_category_id(&mut state)?;
                category.persisted_as(id)
            }
        };
        if let Some(id) = stored.id() {
            state.categories.insert(id, stored.clone());
        }
        Ok(stored)
    }

    /// Returns the number of stored tasks.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] if the repository lock
    /// is poisoned.
    pub fn task_count(&self) -> TaskRepositoryResult<usize> {
        let state = self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.tasks.len())
    }
}

fn next_task_id(state: &mut InMemoryTaskState) -> TaskRepositoryResult<TaskId> {
    let value = state.last_task_id.saturating_add(1);
    let id = TaskId::new(value).map_err(TaskRepositoryError::persistence)?;
    state.last_task_id = value;
    Ok(id)
}

fn next_category_id(state: &mut InMemoryTaskState) -> TaskRepositoryResult<CategoryId> {
    let value = state.last_category_id.saturating_add(1);
    let id = CategoryId::new(value).map_err(TaskRepositoryError::persistence)?;
    state.last_category_id = value;
    Ok(id)
}

/// Checks the whole batch before anything is written so inclusion is
/// all-or-nothing.
fn check_batch(state: &InMemoryTaskState, tasks: &[Task]) -> TaskRepositoryResult<()> {
    for task in tasks {
        if let Some(id) = task.id() {
            return Err(TaskRepositoryError::AlreadyPersisted(id));
        }
        if let Some(category_id) = task.category().id()
            && !state.categories.contains_key(&category_id)
        {
            return Err(TaskRepositoryError::UnknownCategory(category_id));
        }
    }
    Ok(())
}

/// Unsaved categories already stored during the current batch.
type BatchCategories = Vec<(Category, Category)>;

fn resolve_category(
    state: &mut InMemoryTaskState,
    batch: &mut BatchCategories,
    category: &Category,
) -> TaskRepositoryResult<Category> {
    if let Some(id) = category.id() {
        return state
            .categories
            .get(&id)
            .cloned()
            .ok_or(TaskRepositoryError::UnknownCategory(id));
    }
    if let Some((_, stored)) = batch.iter().find(|(unsaved, _)| unsaved == category) {
        return Ok(stored.clone());
    }
    let id = next_category_id(state)?;
    let stored = category.persisted_as(id);
    state.categories.insert(id, stored.clone());
    batch.push((category.clone(), stored.clone()));
    Ok(stored)
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn include_tasks(&self, tasks: &[Task]) -> TaskRepositoryResult<Vec<Task>> {
        let mut state = self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        check_batch(&state, tasks)?;

        let mut batch = BatchCategories::new();
        let mut stored = Vec::with_capacity(tasks.len());
        for task in tasks {
            let category = resolve_category(&mut state, &mut batch, task.category())?;
            let id = next_task_id(&mut state)?;
            let persisted = task.with_id(id, category);
            state.tasks.push(persisted.clone());
            stored.push(persisted);
        }
        tracing::debug!(count = stored.len(), "included tasks in memory");
        Ok(stored)
    }

    async fn find_tasks(&self, predicate: &TaskPredicate) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state
            .tasks
            .iter()
            .filter(|task| predicate(*task))
            .cloned()
            .collect())
    }

    async fn category_by_id(&self, id: CategoryId) -> TaskRepositoryResult<Option<Category>> {
        let state = self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.categories.get(&id).cloned())
    }
}
