//! Task status enumeration.

use super::ParseTaskStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Board column a task currently sits in.
///
/// Statuses carry no workflow: a task may move from any status to any other,
/// including the one it already has. Declaration order fixes the ordinal,
/// which is also the wire form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum TaskStatus {
    /// Work has not started.
    #[default]
    ToDo,
    /// Task is being designed.
    InDesign,
    /// Task is being implemented.
    InProgress,
    /// Task is awaiting review.
    ReadyForReview,
    /// Task is awaiting testing.
    ReadyForTest,
    /// Task has been approved.
    Approved,
    /// Task has been completed.
    Done,
}

impl TaskStatus {
    /// Every status in declaration order.
    pub const ALL: [Self; 7] = [
        Self::ToDo,
        Self::InDesign,
        Self::InProgress,
        Self::ReadyForReview,
        Self::ReadyForTest,
        Self::Approved,
        Self::Done,
    ];

    /// Returns the canonical text representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ToDo => "to_do",
            Self::InDesign => "in_design",
            Self::InProgress => "in_progress",
            Self::ReadyForReview => "ready_for_review",
            Self::ReadyForTest => "ready_for_test",
            Self::Approved => "approved",
            Self::Done => "done",
        }
    }

    /// Returns the zero-based position in declaration order.
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        match self {
            Self::ToDo => 0,
            Self::InDesign => 1,
            Self::InProgress => 2,
            Self::ReadyForReview => 3,
            Self::ReadyForTest => 4,
            Self::Approved => 5,
            Self::Done => 6,
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<TaskStatus> for u8 {
    fn from(status: TaskStatus) -> Self {
        status.ordinal()
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == normalized)
            .ok_or_else(|| ParseTaskStatusError::UnknownName(value.to_owned()))
    }
}

impl TryFrom<u8> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|status| status.ordinal() == value)
            .ok_or(ParseTaskStatusError::UnknownOrdinal(value))
    }
}
