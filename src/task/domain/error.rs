//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while validating domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task name is empty after trimming.
    #[error("task name is required")]
    EmptyName,
}

/// Error returned while parsing task statuses from external input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseTaskStatusError {
    /// The text form does not name a known status.
    #[error("unknown task status: {0}")]
    UnknownName(String),

    /// The ordinal lies outside the declared statuses.
    #[error("unknown task status ordinal: {0}")]
    UnknownOrdinal(u8),
}
