//! Application services for task tracking.

mod config;
mod task;

pub use config::TaskServiceConfig;
pub use task::{TaskService, TaskServiceError, TaskServiceResult};
