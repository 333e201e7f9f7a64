//! Domain model for task tracking.
//!
//! The task domain holds the task record, its identifier and the flat status
//! enumeration. Storage and transport concerns stay outside this boundary.

mod error;
mod ids;
mod status;
mod task;

pub use error::{ParseTaskStatusError, TaskDomainError};
pub use ids::TaskId;
pub use status::TaskStatus;
pub use task::Task;
