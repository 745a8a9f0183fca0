//! Runtime configuration read from the environment.
//!
//! | Variable                  | Meaning                           | Default |
//! |---------------------------|-----------------------------------|---------|
//! | `TASKBOOK_DATABASE_URL`   | `PostgreSQL` connection string    | unset   |
//! | `TASKBOOK_MAX_POOL_SIZE`  | Maximum pooled connections        | `4`     |
//! | `TASKBOOK_LOG`            | `tracing` filter directive        | `info`  |

use thiserror::Error;

/// Environment variable holding the database URL.
pub const DATABASE_URL_VAR: &str = "TASKBOOK_DATABASE_URL";
/// Environment variable holding the connection pool size.
pub const MAX_POOL_SIZE_VAR: &str = "TASKBOOK_MAX_POOL_SIZE";
/// Environment variable holding the log filter.
pub const LOG_FILTER_VAR: &str = "TASKBOOK_LOG";

const DEFAULT_MAX_POOL_SIZE: u32 = 4;
const DEFAULT_LOG_FILTER: &str = "info";

/// Errors raised while reading configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// No database URL was configured.
    #[error("TASKBOOK_DATABASE_URL is not set")]
    MissingDatabaseUrl,

    /// The pool size is not a positive integer.
    #[error("invalid TASKBOOK_MAX_POOL_SIZE '{0}', expected a positive integer")]
    InvalidPoolSize(String),
}

/// Crate configuration.
///
/// # Examples
///
/// ```
/// use taskbook::config::TaskbookConfig;
///
/// let config = TaskbookConfig::from_lookup(|key| match key {
///     "TASKBOOK_MAX_POOL_SIZE" => Some("8".to_owned()),
///     _ => None,
/// })
/// .expect("valid configuration");
/// assert_eq!(config.max_pool_size(), 8);
/// assert_eq!(config.log_filter(), "info");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskbookConfig {
    database_url: Option<String>,
    max_pool_size: u32,
    log_filter: String,
}

impl Default for TaskbookConfig {
    fn default() -> Self {
        Self {
            database_url: None,
            max_pool_size: DEFAULT_MAX_POOL_SIZE,
            log_filter: DEFAULT_LOG_FILTER.to_owned(),
        }
    }
}

impl TaskbookConfig {
    /// Reads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPoolSize`] when the pool size variable
    /// is set but not a positive integer.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through an arbitrary variable lookup.
    ///
    /// Blank values are treated as unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPoolSize`] when the pool size variable
    /// is set but not a positive integer.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_owned())
                .filter(|value| !value.is_empty())
        };

        let max_pool_size = match read(MAX_POOL_SIZE_VAR) {
            Some(raw) => parse_pool_size(&raw)?,
            None => DEFAULT_MAX_POOL_SIZE,
        };

        Ok(Self {
            database_url: read(DATABASE_URL_VAR),
            max_pool_size,
            log_filter: read(LOG_FILTER_VAR).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_owned()),
        })
    }

    /// Sets the database URL.
    #[must_use]
    pub fn with_database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    /// Returns the database URL, if configured.
    #[must_use]
    pub fn database_url(&self) -> Option<&str> {
        self.database_url.as_deref()
    }

    /// Returns the maximum number of pooled connections.
    #[must_use]
    pub const fn max_pool_size(&self) -> u32 {
        self.max_pool_size
    }

    /// Returns the `tracing` filter directive.
    #[must_use]
    pub fn log_filter(&self) -> &str {
        &self.log_filter
    }
}

fn parse_pool_size(raw: &str) -> Result<u32, ConfigError> {
    match raw.parse::<u32>() {
        Ok(size) if size > 0 => Ok(size),
        _ => Err(ConfigError::InvalidPoolSize(raw.to_owned())),
    }
}
