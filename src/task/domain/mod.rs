//! Domain model for task registration.
//!
//! Tasks and categories are plain values; identifiers are assigned by
//! storage, so freshly built entities carry none.

mod category;
mod error;
mod ids;
mod task;

pub use category::Category;
pub use error::TaskDomainError;
pub use ids::{CategoryId, TaskId};
pub use task::{PersistedTaskData, Task};
