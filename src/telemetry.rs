//! `tracing` subscriber installation.

use crate::config::TaskbookConfig;
use thiserror::Error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::util::SubscriberInitExt as _;

/// Errors raised while installing the subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The configured filter directive does not parse.
    #[error("invalid log filter: {0}")]
    InvalidFilter(#[from] tracing_subscriber::filter::ParseError),

    /// A global subscriber is already installed.
    #[error("failed to install tracing subscriber: {0}")]
    Install(#[from] tracing_subscriber::util::TryInitError),
}

/// Builds the filter described by the configuration.
///
/// # Errors
///
/// Returns [`TelemetryError::InvalidFilter`] when the directive is malformed.
pub fn env_filter(config: &TaskbookConfig) -> Result<EnvFilter, TelemetryError> {
    Ok(EnvFilter::try_new(config.log_filter())?)
}

/// Installs a formatted `tracing` subscriber as the global default.
///
/// # Errors
///
/// Returns [`TelemetryError::InvalidFilter`] for malformed directives or
/// [`TelemetryError::Install`] when a global subscriber already exists.
pub fn init_tracing(config: &TaskbookConfig) -> Result<(), TelemetryError> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config)?)
        .with_target(true)
        .finish()
        .try_init()?;
    Ok(())
}
