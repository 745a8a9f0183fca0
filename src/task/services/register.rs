//! Command and handler for registering a new task.

use super::CommandResult;
use crate::task::{
    domain::{Category, Task, TaskDomainError},
    error::RegistrationError,
    ports::{TaskLogger, TaskRepository, TaskRepositoryError},
};
use chrono::NaiveDate;
use mockable::Clock;
use std::sync::Arc;

const PERSISTING_MESSAGE: &str = "Persisting the task...";
const FAILURE_MESSAGE: &str = "Failed to register the task";
const PERSISTENCE_FAILURE_RESULT: &str = "the task could not be persisted";

/// Request to register a new task.
///
/// No validation happens at construction; the handler validates before
/// anything reaches storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterTask {
    title: String,
    category: Option<Category>,
    due_date: NaiveDate,
}

impl RegisterTask {
    /// Creates a registration command.
    ///
    /// `category` is `None` when the caller could not resolve one.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        category: impl Into<Option<Category>>,
        due_date: NaiveDate,
    ) -> Self {
        Self {
            title: title.into(),
            category: category.into(),
            due_date,
        }
    }

    /// Returns the requested title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the requested category, if one was resolved.
    #[must_use]
    pub const fn category(&self) -> Option<&Category> {
        self.category.as_ref()
    }

    /// Returns the requested due date.
    #[must_use]
    pub const fn due_date(&self) -> NaiveDate {
        self.due_date
    }
}

/// Handles [`RegisterTask`] commands.
///
/// The handler is stateless across calls: each execution is an independent
/// transaction delegated to the repository.
pub struct RegisterTaskHandler<R, L, C>
where
    R: TaskRepository,
    L: TaskLogger,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    logger: Arc<L>,
    clock: Arc<C>,
}

impl<R, L, C> Clone for RegisterTaskHandler<R, L, C>
where
    R: TaskRepository,
    L: TaskLogger,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            logger: Arc::clone(&self.logger),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R, L, C> RegisterTaskHandler<R, L, C>
where
    R: TaskRepository,
    L: TaskLogger,
    C: Clock + Send + Sync,
{
    /// Creates a new registration handler.
    #[must_use]
    pub const fn new(repository: Arc<R>, logger: Arc<L>, clock: Arc<C>) -> Self {
        Self {
            repository,
            logger,
            clock,
        }
    }

    /// Executes the command and reports the outcome.
    ///
    /// Never fails: every error is logged once at error level and turned
    /// into an unsuccessful [`CommandResult`].
    pub async fn execute(&self, command: &RegisterTask) -> CommandResult {
        match self.register(command).await {
            Ok(_) => CommandResult::success(),
            Err(err) => {
                self.logger.error(FAILURE_MESSAGE, &err);
                failure_result(&err)
            }
        }
    }

    /// Validates and persists the task described by `command`.
    ///
    /// Unlike [`Self::execute`], this returns the stored task and leaves
    /// error logging to the caller. The progress message is still logged.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrationError::Validation`] when the command is invalid
    /// or [`RegistrationError::Repository`] when storage fails or hands back
    /// no stored task.
    pub async fn register(&self, command: &RegisterTask) -> Result<Task, RegistrationError> {
        self.logger.debug(PERSISTING_MESSAGE);

        let category = command
            .category()
            .cloned()
            .ok_or(TaskDomainError::UnresolvedCategory)?;
        let task = Task::new(command.title(), category, command.due_date(), &*self.clock)?;

        let stored = self.repository.include_tasks(std::slice::from_ref(&task)).await?;
        let task = stored
            .into_iter()
            .next()
            .ok_or(TaskRepositoryError::NotStored)?;
        Ok(task)
    }
}

fn failure_result(err: &RegistrationError) -> CommandResult {
    match err {
        RegistrationError::Validation(domain) => CommandResult::failure(domain.to_string()),
        RegistrationError::Repository(_) => CommandResult::failure(PERSISTENCE_FAILURE_RESULT),
    }
}
