//! Connection pool construction from crate configuration.

use super::TaskPgPool;
use crate::config::{ConfigError, TaskbookConfig};
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool, PoolError};
use thiserror::Error;

/// Errors raised while building the `PostgreSQL` pool.
#[derive(Debug, Error)]
pub enum PoolSetupError {
    /// The configuration cannot describe a pool.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The pool could not open its initial connections.
    #[error("failed to build connection pool: {0}")]
    Pool(#[from] PoolError),
}

/// Builds a connection pool for [`super::PostgresTaskRepository`].
///
/// # Errors
///
/// Returns [`PoolSetupError::Config`] when no database URL is configured, or
/// [`PoolSetupError::Pool`] when the database cannot be reached.
pub fn build_pool(config: &TaskbookConfig) -> Result<TaskPgPool, PoolSetupError> {
    let url = config
        .database_url()
        .ok_or(ConfigError::MissingDatabaseUrl)?;
    let manager = ConnectionManager::<PgConnection>::new(url);
    let pool = Pool::builder()
        .max_size(config.max_pool_size())
        .build(manager)?;
    Ok(pool)
}
