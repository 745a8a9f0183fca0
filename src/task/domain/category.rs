//! Task categories.

use super::{CategoryId, TaskDomainError};
use serde::{Deserialize, Serialize};

/// Classification a task belongs to.
///
/// A category without an identifier has not been persisted yet; storage
/// assigns one when the first task referencing it is included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    id: Option<CategoryId>,
    name: String,
}

impl Category {
    /// Creates a category that storage has not seen yet.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyCategoryName`] if the name is blank.
    pub fn new(name: impl Into<String>) -> Result<Self, TaskDomainError> {
        Ok(Self {
            id: None,
            name: normalize_name(name.into())?,
        })
    }

    /// Creates a category that already exists in storage.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyCategoryName`] if the name is blank.
    pub fn with_id(id: CategoryId, name: impl Into<String>) -> Result<Self, TaskDomainError> {
        Ok(Self {
            id: Some(id),
            name: normalize_name(name.into())?,
        })
    }

    /// Returns the storage identifier, if the category has been persisted.
    #[must_use]
    pub const fn id(&self) -> Option<CategoryId> {
        self.id
    }

    /// Returns the category name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns a copy carrying the given storage identifier.
    #[must_use]
    pub fn persisted_as(&self, id: CategoryId) -> Self {
        Self {
            id: Some(id),
            name: self.name.clone(),
        }
    }
}

fn normalize_name(raw: String) -> Result<String, TaskDomainError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(TaskDomainError::EmptyCategoryName);
    }
    Ok(trimmed.to_owned())
}
