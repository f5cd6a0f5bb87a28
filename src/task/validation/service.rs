//! Validation service implementation.
//!
//! Provides the default implementation of the `TaskRequestValidator` port,
//! applying the individual rules in a fixed order.

use crate::task::{
    domain::{TaskDraft, TaskRequest},
    ports::{TaskRequestValidator, TaskValidationResult},
    validation::rules,
};
use chrono::NaiveDate;

/// Default implementation of the task request validator.
///
/// Rules run in this order and the first failure is returned:
///
/// 1. the title is present and not blank;
/// 2. the deadline is present;
/// 3. the deadline is not before today.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use tasklist::task::domain::{TaskRequest, TaskValidationError};
/// use tasklist::task::ports::TaskRequestValidator;
/// use tasklist::task::validation::DefaultTaskValidator;
///
/// let today = NaiveDate::from_ymd_opt(2026, 3, 10).expect("valid date");
/// let yesterday = NaiveDate::from_ymd_opt(2026, 3, 9).expect("valid date");
/// let validator = DefaultTaskValidator::new();
///
/// assert!(validator.validate(TaskRequest::new("Ship it", today), today).is_ok());
/// assert!(matches!(
///     validator.validate(TaskRequest::new("Ship it", yesterday), today),
///     Err(TaskValidationError::DeadlineInPast { .. })
/// ));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTaskValidator;

impl DefaultTaskValidator {
    /// Creates a new validator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl TaskRequestValidator for DefaultTaskValidator {
    fn validate(&self, request: TaskRequest, today: NaiveDate) -> TaskValidationResult<TaskDraft> {
        let TaskRequest {
            title,
            description,
            deadline,
            status,
        } = request;

        let accepted_title = rules::validate_title(title)?;
        let accepted_deadline = rules::validate_deadline_present(deadline)?;
        rules::validate_deadline_not_past(accepted_deadline, today)?;

        Ok(TaskDraft {
            title: accepted_title,
            description,
            deadline: accepted_deadline,
            status,
        })
    }
}
