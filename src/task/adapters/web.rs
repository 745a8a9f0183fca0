//! Transport adapter for the task registration endpoint.
//!
//! Translates a submitted form into a [`RegisterTask`] command and maps the
//! handler's [`CommandResult`](crate::task::services::CommandResult) onto a
//! status class. No error detail crosses this boundary.

use crate::task::{
    domain::{Category, CategoryId},
    ports::{TaskLogger, TaskRepository},
    services::{RegisterTask, RegisterTaskHandler},
};
use chrono::NaiveDate;
use mockable::Clock;
use serde::Deserialize;
use std::sync::Arc;

/// Form submitted to register a task.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegisterTaskForm {
    /// Identifier of an existing category.
    pub category_id: i64,
    /// Task title.
    pub title: String,
    /// Due date in `YYYY-MM-DD` form.
    pub due_date: NaiveDate,
}

/// Status class returned to the transport layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointStatus {
    /// The task was registered.
    Ok,
    /// Registration failed on the server side.
    InternalServerError,
}

impl EndpointStatus {
    /// Returns the HTTP status code for this outcome.
    #[must_use]
    pub const fn code(self) -> u16 {
        match self {
            Self::Ok => 200,
            Self::InternalServerError => 500,
        }
    }
}

/// Task registration endpoint.
pub struct TaskEndpoint<R, L, C>
where
    R: TaskRepository,
    L: TaskLogger,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    handler: RegisterTaskHandler<R, L, C>,
}

impl<R, L, C> TaskEndpoint<R, L, C>
where
    R: TaskRepository,
    L: TaskLogger,
    C: Clock + Send + Sync,
{
    /// Creates an endpoint sharing `repository` with its handler.
    #[must_use]
    pub fn new(repository: Arc<R>, logger: Arc<L>, clock: Arc<C>) -> Self {
        let handler = RegisterTaskHandler::new(Arc::clone(&repository), logger, clock);
        Self {
            repository,
            handler,
        }
    }

    /// Registers the task described by `form`.
    ///
    /// An unknown category identifier reaches the handler as an unresolved
    /// category and surfaces as [`EndpointStatus::InternalServerError`].
    pub async fn register_task(&self, form: &RegisterTaskForm) -> EndpointStatus {
        let category = self.resolve_category(form.category_id).await;
        let command = RegisterTask::new(form.title.clone(), category, form.due_date);

        if self.handler.execute(&command).await.is_success() {
            EndpointStatus::Ok
        } else {
            EndpointStatus::InternalServerError
        }
    }

    async fn resolve_category(&self, raw_id: i64) -> Option<Category> {
        let id = CategoryId::new(raw_id).ok()?;
        match self.repository.category_by_id(id).await {
            Ok(category) => category,
            Err(err) => {
                tracing::warn!(category_id = raw_id, error = %err, "category lookup failed");
                None
            }
        }
    }
}
