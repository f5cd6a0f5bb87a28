//! Task aggregate and the values used to create and revise it.

use super::{TaskId, TaskStatus};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Description stored when a request omits one.
pub const DEFAULT_DESCRIPTION: &str = "No description";

/// Validated task fields extracted from a request.
///
/// Produced by a validator; the title is non-blank and the deadline is not
/// before the date validation ran on. Optional fields are resolved by the
/// consumer ([`NewTask::from_draft`] or [`Task::revise`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    /// Task title.
    pub title: String,
    /// Task description, if supplied.
    pub description: Option<String>,
    /// Task deadline.
    pub deadline: NaiveDate,
    /// Task status, if supplied.
    pub status: Option<TaskStatus>,
}

/// A task that has not been stored yet and therefore has no identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    title: String,
    description: String,
    deadline: NaiveDate,
    status: TaskStatus,
}

impl NewTask {
    /// Builds an unsaved task from a validated draft.
    ///
    /// A missing description becomes [`DEFAULT_DESCRIPTION`] and a missing
    /// status becomes [`TaskStatus::Todo`].
    #[must_use]
    pub fn from_draft(draft: TaskDraft) -> Self {
        let TaskDraft {
            title,
            description,
            deadline,
            status,
        } = draft;
        Self {
            title,
            description: description.unwrap_or_else(|| DEFAULT_DESCRIPTION.to_owned()),
            deadline,
            status: status.unwrap_or_default(),
        }
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the task deadline.
    #[must_use]
    pub const fn deadline(&self) -> NaiveDate {
        self.deadline
    }

    /// Returns the task status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Attaches a store-assigned identity, producing a persisted task.
    #[must_use]
    pub fn into_task(self, id: TaskId) -> Task {
        Task {
            id,
            title: self.title,
            description: self.description,
            deadline: self.deadline,
            status: self.status,
        }
    }
}

/// Task aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: String,
    description: String,
    deadline: NaiveDate,
    status: TaskStatus,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: String,
    /// Persisted description.
    pub description: String,
    /// Persisted deadline.
    pub deadline: NaiveDate,
    /// Persisted status.
    pub status: TaskStatus,
}

impl Task {
    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            deadline: data.deadline,
            status: data.status,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the task deadline.
    #[must_use]
    pub const fn deadline(&self) -> NaiveDate {
        self.deadline
    }

    /// Returns the task status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Overwrites the mutable fields with a validated draft.
    ///
    /// A missing description becomes [`DEFAULT_DESCRIPTION`]; a missing
    /// status keeps the current one. The identity is never touched.
    pub fn revise(&mut self, draft: TaskDraft) {
        self.title = draft.title;
        self.description = draft
            .description
            .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_owned());
        self.deadline = draft.deadline;
        if let Some(status) = draft.status {
            self.status = status;
        }
    }
}
