//! Application services for task registration.

mod register;
mod result;

pub use register::{RegisterTask, RegisterTaskHandler};
pub use result::CommandResult;
