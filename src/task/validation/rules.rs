//! Individual validation rule implementations.
//!
//! Each rule is a pure function over one request field. Rules return the
//! accepted value on success or a specific `TaskValidationError` on failure.

use crate::task::domain::TaskValidationError;
use chrono::NaiveDate;

/// Validates that a title is present and not blank.
///
/// The accepted title is returned untrimmed.
///
/// # Errors
///
/// Returns `TaskValidationError::EmptyTitle` if the title is missing or
/// contains only whitespace.
pub fn validate_title(title: Option<String>) -> Result<String, TaskValidationError> {
    title
        .filter(|value| !value.trim().is_empty())
        .ok_or(TaskValidationError::EmptyTitle)
}

/// Validates that a deadline is present.
///
/// # Errors
///
/// Returns `TaskValidationError::MissingDeadline` if the deadline is missing.
pub const fn validate_deadline_present(
    deadline: Option<NaiveDate>,
) -> Result<NaiveDate, TaskValidationError> {
    match deadline {
        Some(value) => Ok(value),
        None => Err(TaskValidationError::MissingDeadline),
    }
}

/// Validates that a deadline is not strictly before `today`.
///
/// A deadline equal to `today` is accepted.
///
/// # Errors
///
/// Returns `TaskValidationError::DeadlineInPast` if `deadline < today`.
pub fn validate_deadline_not_past(
    deadline: NaiveDate,
    today: NaiveDate,
) -> Result<(), TaskValidationError> {
    if deadline < today {
        return Err(TaskValidationError::DeadlineInPast { deadline, today });
    }
    Ok(())
}
