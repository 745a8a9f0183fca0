//! Task registration for the to-do application.
//!
//! A caller submits a [`services::RegisterTask`] command; the
//! [`services::RegisterTaskHandler`] validates it, persists the resulting
//! task through the [`ports::TaskRepository`] port, logs through the
//! [`ports::TaskLogger`] port, and reports a [`services::CommandResult`].
//! The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Command handling in [`services`]

pub mod adapters;
pub mod domain;
pub mod error;
pub mod ports;
pub mod services;
