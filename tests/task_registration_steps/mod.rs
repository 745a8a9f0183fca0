//! Step definitions for task registration scenarios.

pub mod then;
