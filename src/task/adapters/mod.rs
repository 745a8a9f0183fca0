//! Adapter implementations for the task registration ports.
//!
//! # Available Adapters
//!
//! - [`memory::InMemoryTaskRepository`]: thread-safe in-memory storage for
//!   tests and local runs
//! - [`postgres::PostgresTaskRepository`]: `PostgreSQL` persistence using
//!   Diesel
//! - [`TracingTaskLogger`]: forwards handler log entries to `tracing`
//! - [`web::TaskEndpoint`]: maps transport-level forms to registration
//!   commands and results to status codes

pub mod memory;
pub mod postgres;
pub mod web;

mod logging;

pub use logging::TracingTaskLogger;
