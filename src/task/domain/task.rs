//! Task record and its builder-style accessors.

use super::{TaskDomainError, TaskId, TaskStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A tracked unit of work.
///
/// Tasks are plain values: the repository owns the canonical copy and callers
/// only ever hold clones, so later changes to the store are never observed
/// through a previously returned task.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    name: String,
    description: Option<String>,
    deadline: Option<DateTime<Utc>>,
    status: TaskStatus,
    is_favorite: bool,
    attachments: Vec<String>,
}

impl Task {
    /// Creates a task with the given name and default values elsewhere.
    ///
    /// The generated identifier is provisional; the service replaces it when
    /// the task is added.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Sets the task identifier, used when addressing an existing task.
    #[must_use]
    pub const fn with_id(mut self, id: TaskId) -> Self {
        self.id = id;
        self
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the task deadline.
    #[must_use]
    pub const fn with_deadline(mut self, deadline: DateTime<Utc>) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Sets the task status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    /// Marks or unmarks the task as a favourite.
    #[must_use]
    pub const fn with_favorite(mut self, is_favorite: bool) -> Self {
        self.is_favorite = is_favorite;
        self
    }

    /// Sets the task attachments, preserving their order.
    #[must_use]
    pub fn with_attachments(mut self, attachments: impl IntoIterator<Item = String>) -> Self {
        self.attachments = attachments.into_iter().collect();
        self
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the task description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the task deadline, if any.
    #[must_use]
    pub const fn deadline(&self) -> Option<DateTime<Utc>> {
        self.deadline
    }

    /// Returns the current status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns whether the task is marked as a favourite.
    #[must_use]
    pub const fn is_favorite(&self) -> bool {
        self.is_favorite
    }

    /// Returns the attachment references in insertion order.
    #[must_use]
    pub fn attachments(&self) -> &[String] {
        &self.attachments
    }

    /// Moves the task to another status. Any status is accepted.
    pub const fn set_status(&mut self, status: TaskStatus) {
        self.status = status;
    }

    /// Checks that the task name is present.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyName`] when the name is empty or
    /// whitespace-only.
    pub fn validate(&self) -> Result<(), TaskDomainError> {
        if self.name.trim().is_empty() {
            return Err(TaskDomainError::EmptyName);
        }
        Ok(())
    }

    /// Replaces the identifier with one minted by the service.
    pub(crate) const fn assign_id(&mut self, id: TaskId) {
        self.id = id;
    }
}
