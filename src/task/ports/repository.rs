//! Repository port for task storage and lookup.

use crate::task::domain::{Task, TaskId};
use async_trait::async_trait;

/// Task storage contract.
///
/// Implementations own the canonical task collection and carry no business
/// rules. None of the operations fail: absence is reported through the return
/// value.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a task. No duplicate-identifier check is performed.
    async fn add(&self, task: Task);

    /// Returns a snapshot of all stored tasks in insertion order.
    async fn get_all(&self) -> Vec<Task>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn get_by_id(&self, id: TaskId) -> Option<Task>;

    /// Replaces the stored task whose identifier matches `task`.
    ///
    /// Returns `false` and leaves the store unchanged when no task matches.
    async fn update(&self, task: Task) -> bool;

    /// Removes the task with the given identifier.
    ///
    /// Returns `false` when no task matches.
    async fn delete(&self, id: TaskId) -> bool;
}
