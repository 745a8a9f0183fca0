//! Task entity and its persisted representation.

use super::{Category, TaskDomainError, TaskId};
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A registered to-do item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: Option<TaskId>,
    title: String,
    category: Category,
    due_date: NaiveDate,
    created_at: DateTime<Utc>,
    completed: bool,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: String,
    /// Persisted category.
    pub category: Category,
    /// Persisted due date.
    pub due_date: NaiveDate,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted completion status.
    pub completed: bool,
}

impl Task {
    /// Creates a new, not yet persisted, task.
    ///
    /// The title is trimmed; the task starts out not completed.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTaskTitle`] if the title is blank.
    pub fn new(
        title: &str,
        category: Category,
        due_date: NaiveDate,
        clock: &impl Clock,
    ) -> Result<Self, TaskDomainError> {
        let normalized = title.trim();
        if normalized.is_empty() {
            return Err(TaskDomainError::EmptyTaskTitle);
        }

        Ok(Self {
            id: None,
            title: normalized.to_owned(),
            category,
            due_date,
            created_at: clock.utc(),
            completed: false,
        })
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: Some(data.id),
            title: data.title,
            category: data.category,
            due_date: data.due_date,
            created_at: data.created_at,
            completed: data.completed,
        }
    }

    /// Returns a copy carrying storage-assigned identifiers.
    #[must_use]
    pub fn with_id(&self, id: TaskId, category: Category) -> Self {
        Self {
            id: Some(id),
            category,
            ..self.clone()
        }
    }

    /// Returns the storage identifier, if the task has been persisted.
    #[must_use]
    pub const fn id(&self) -> Option<TaskId> {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the task category.
    #[must_use]
    pub const fn category(&self) -> &Category {
        &self.category
    }

    /// Returns the due date.
    #[must_use]
    pub const fn due_date(&self) -> NaiveDate {
        self.due_date
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns whether the task has been completed.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    /// Marks the task as completed.
    pub const fn mark_completed(&mut self) {
        self.completed = true;
    }
}
