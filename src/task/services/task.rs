//! Service layer for task creation, lookup, ordering and status changes.

use crate::task::{
    domain::{Task, TaskDomainError, TaskId, TaskStatus},
    ports::TaskRepository,
};
use std::cmp::{Ordering, Reverse};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

use super::TaskServiceConfig;

/// Service-level errors for task operations.
///
/// Missing tasks are not errors; they are reported as `None` or `false`.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Validation(#[from] TaskDomainError),
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task business rules layered over a shared repository.
///
/// The service holds no mutable state of its own, so any number of services
/// may share one repository.
pub struct TaskService<R>
where
    R: TaskRepository,
{
    repository: Arc<R>,
    config: TaskServiceConfig,
}

impl<R> Clone for TaskService<R>
where
    R: TaskRepository,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            config: self.config,
        }
    }
}

impl<R> TaskService<R>
where
    R: TaskRepository,
{
    /// Creates a task service with the default configuration.
    #[must_use]
    pub fn new(repository: Arc<R>) -> Self {
        Self::with_config(repository, TaskServiceConfig::default())
    }

    /// Creates a task service with a custom configuration.
    #[must_use]
    pub const fn with_config(repository: Arc<R>, config: TaskServiceConfig) -> Self {
        Self { repository, config }
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &TaskServiceConfig {
        &self.config
    }

    /// Lists all tasks.
    ///
    /// With `sort` unset the repository order is kept. With `sort` set,
    /// favourites come first and each group is ordered by name, ignoring case
    /// first; tasks that tie on both keep their repository order.
    pub async fn get_all_tasks(&self, sort: bool) -> Vec<Task> {
        let mut tasks = self.repository.get_all().await;
        if sort {
            tasks.sort_by(|left, right| {
                Reverse(left.is_favorite())
                    .cmp(&Reverse(right.is_favorite()))
                    .then_with(|| compare_names(left.name(), right.name()))
            });
        }
        debug!(count = tasks.len(), sort, "listed tasks");
        tasks
    }

    /// Retrieves a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    pub async fn get_task_by_id(&self, id: TaskId) -> Option<Task> {
        let task = self.repository.get_by_id(id).await;
        debug!(task_id = %id, found = task.is_some(), "looked up task");
        task
    }

    /// Adds a new task under a freshly minted identifier.
    ///
    /// Any identifier carried by `task` is discarded.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Validation`] when the name is empty or
    /// whitespace-only. Nothing is stored in that case.
    pub async fn add_task(&self, mut task: Task) -> TaskServiceResult<Task> {
        if let Err(err) = task.validate() {
            warn!(error = %err, "rejected task addition");
            return Err(err.into());
        }

        task.assign_id(TaskId::new());
        self.repository.add(task.clone()).await;
        info!(task_id = %task.id(), name = task.name(), "added task");
        Ok(task)
    }

    /// Replaces an existing task wholesale.
    ///
    /// Returns `Ok(false)` without touching the store when no task has the
    /// given identifier. Field values are only validated when
    /// [`TaskServiceConfig::validate_updates`] is set.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Validation`] when update validation is
    /// enabled and the name is empty or whitespace-only.
    pub async fn update_task(&self, task: Task) -> TaskServiceResult<bool> {
        let task_id = task.id();
        if self.repository.get_by_id(task_id).await.is_none() {
            debug!(task_id = %task_id, "update skipped, task not found");
            return Ok(false);
        }

        if self.config.validate_updates {
            if let Err(err) = task.validate() {
                warn!(task_id = %task_id, error = %err, "rejected task update");
                return Err(err.into());
            }
        }

        let updated = self.repository.update(task).await;
        info!(task_id = %task_id, updated, "updated task");
        Ok(updated)
    }

    /// Deletes a task by identifier.
    ///
    /// Returns `false` when the task does not exist.
    pub async fn delete_task(&self, id: TaskId) -> bool {
        let deleted = self.repository.delete(id).await;
        info!(task_id = %id, deleted, "deleted task");
        deleted
    }

    /// Moves a task to another status, leaving every other field untouched.
    ///
    /// No transition rules apply: any status may follow any other. Returns
    /// `false` when the task does not exist.
    pub async fn update_task_status(&self, id: TaskId, status: TaskStatus) -> bool {
        let Some(mut task) = self.repository.get_by_id(id).await else {
            debug!(task_id = %id, "status change skipped, task not found");
            return false;
        };

        let previous = task.status();
        task.set_status(status);
        let updated = self.repository.update(task).await;
        info!(task_id = %id, from = %previous, to = %status, updated, "changed task status");
        updated
    }
}

/// Orders names case-insensitively, breaking ties by exact code points.
fn compare_names(left: &str, right: &str) -> Ordering {
    left.to_lowercase()
        .cmp(&right.to_lowercase())
        .then_with(|| left.cmp(right))
}
