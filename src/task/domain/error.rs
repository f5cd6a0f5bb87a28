//! Error types for task domain validation and parsing.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task identifier is not a positive integer.
    #[error("invalid task identifier {0}, expected a positive integer")]
    InvalidTaskId(i64),
}

/// Error returned while parsing task statuses from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

/// Rejections produced when a task request fails validation.
///
/// Rules are checked in declaration order and the first failure wins.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskValidationError {
    /// The title is missing or blank after trimming.
    #[error("title must not be empty")]
    EmptyTitle,

    /// The deadline is missing.
    #[error("deadline must not be empty")]
    MissingDeadline,

    /// The deadline falls strictly before the current date.
    #[error("deadline cannot be earlier than today")]
    DeadlineInPast {
        /// Requested deadline.
        deadline: NaiveDate,
        /// Date the validation ran on.
        today: NaiveDate,
    },
}

impl TaskValidationError {
    /// Returns the request field the rejection refers to.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::EmptyTitle => "title",
            Self::MissingDeadline | Self::DeadlineInPast { .. } => "deadline",
        }
    }
}
