//! Error types for schedule domain construction and parsing.

use thiserror::Error;

/// Errors returned while constructing domain schedule values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task identifier is empty after trimming.
    #[error("task identifier must not be empty")]
    EmptyTaskId,

    /// The hour component is outside `0..=23`.
    #[error("hour {0} is out of range, expected 0-23")]
    HourOutOfRange(u8),

    /// The minute component is outside `0..=59`.
    #[error("minute {0} is out of range, expected 0-59")]
    MinuteOutOfRange(u8),
}

/// Error returned while parsing task priorities from form input or storage.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task priority: {0}")]
pub struct ParsePriorityError(pub String);
