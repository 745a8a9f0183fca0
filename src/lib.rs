//! Taskbook: task registration for a to-do management application.
//!
//! A caller submits a task (title, category, due date); the crate validates
//! it, persists it through a repository port, logs the outcome, and returns
//! a success or failure result.
//!
//! # Architecture
//!
//! Taskbook follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, logging,
//!   transport)
//!
//! # Modules
//!
//! - [`task`]: Task registration command handling
//! - [`config`]: Environment-driven configuration
//! - [`telemetry`]: `tracing` subscriber installation

pub mod config;
pub mod task;
pub mod telemetry;
