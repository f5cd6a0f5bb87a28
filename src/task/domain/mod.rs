//! Domain model for task management.
//!
//! The task domain models task records, their status ranking, list queries,
//! and the request/response shapes exchanged with callers while keeping all
//! infrastructure concerns outside of the domain boundary.

mod dto;
mod error;
mod ids;
mod query;
mod status;
mod task;

pub use dto::{DEADLINE_FORMAT, TaskRequest, TaskResponse, deadline_format};
pub use error::{ParseTaskStatusError, TaskDomainError, TaskValidationError};
pub use ids::TaskId;
pub use query::{SortBy, SortDirection, TaskQuery};
pub use status::TaskStatus;
pub use task::{DEFAULT_DESCRIPTION, NewTask, PersistedTaskData, Task, TaskDraft};
