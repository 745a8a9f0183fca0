//! Port contracts for task registration.
//!
//! Ports define infrastructure-agnostic interfaces used by task services.

pub mod logger;
pub mod repository;

pub use logger::TaskLogger;
pub use repository::{TaskPredicate, TaskRepository, TaskRepositoryError, TaskRepositoryResult};
