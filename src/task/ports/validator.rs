//! Validator port for task requests.

use crate::task::domain::{TaskDraft, TaskRequest, TaskValidationError};
use chrono::NaiveDate;

/// Result type for validation operations.
pub type TaskValidationResult<T> = Result<T, TaskValidationError>;

/// Port for task request validation.
///
/// Implementations must be pure: the outcome depends only on the request
/// and the supplied date, and nothing is written anywhere.
pub trait TaskRequestValidator: Send + Sync {
    /// Validates a request and extracts its fields.
    ///
    /// `today` is the caller's local calendar date; deadlines strictly
    /// before it are rejected.
    ///
    /// # Errors
    ///
    /// Returns the first [`TaskValidationError`] in rule order.
    fn validate(&self, request: TaskRequest, today: NaiveDate) -> TaskValidationResult<TaskDraft>;
}
