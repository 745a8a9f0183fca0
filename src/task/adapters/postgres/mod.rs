//! `PostgreSQL` adapters for task persistence.

mod models;
mod pool;
mod repository;
mod schema;

pub use pool::{PoolSetupError, build_pool};
pub use repository::{PostgresTaskRepository, TaskPgPool};
