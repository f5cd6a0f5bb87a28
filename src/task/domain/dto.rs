//! Request and response shapes exchanged with callers of the task service.

use super::{Task, TaskId, TaskStatus};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Text format of deadline dates on the wire (`dd.MM.yyyy`).
pub const DEADLINE_FORMAT: &str = "%d.%m.%Y";

/// Unvalidated task input.
///
/// Every field may be absent; the validator decides which absences are
/// errors and the service applies defaults to the rest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRequest {
    /// Task title.
    #[serde(default)]
    pub title: Option<String>,
    /// Task description.
    #[serde(default)]
    pub description: Option<String>,
    /// Task deadline.
    #[serde(default, with = "deadline_format::option")]
    pub deadline: Option<NaiveDate>,
    /// Task status.
    #[serde(default)]
    pub status: Option<TaskStatus>,
}

impl TaskRequest {
    /// Creates a request with the required fields set.
    #[must_use]
    pub fn new(title: impl Into<String>, deadline: NaiveDate) -> Self {
        Self {
            title: Some(title.into()),
            deadline: Some(deadline),
            ..Self::default()
        }
    }

    /// Sets the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the deadline.
    #[must_use]
    pub const fn with_deadline(mut self, deadline: NaiveDate) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Sets the status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }
}

/// Read-only projection of a stored task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskResponse {
    /// Task identifier.
    pub id: TaskId,
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Task deadline.
    #[serde(with = "deadline_format")]
    pub deadline: NaiveDate,
    /// Task status.
    pub status: TaskStatus,
}

impl From<&Task> for TaskResponse {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id(),
            title: task.title().to_owned(),
            description: task.description().to_owned(),
            deadline: task.deadline(),
            status: task.status(),
        }
    }
}

impl From<Task> for TaskResponse {
    fn from(task: Task) -> Self {
        Self::from(&task)
    }
}

/// Serde helpers encoding [`NaiveDate`] as [`DEADLINE_FORMAT`] text.
pub mod deadline_format {
    use super::DEADLINE_FORMAT;
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer, de};

    /// Serializes a date as `dd.MM.yyyy`.
    ///
    /// # Errors
    ///
    /// Returns the serializer's error when writing fails.
    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&date.format(DEADLINE_FORMAT))
    }

    /// Deserializes a date from `dd.MM.yyyy`.
    ///
    /// # Errors
    ///
    /// Returns a deserializer error when the text is not a valid date in
    /// that format.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&raw, DEADLINE_FORMAT).map_err(de::Error::custom)
    }

    /// The same encoding for optional dates; `null` maps to `None`.
    pub mod option {
        use super::DEADLINE_FORMAT;
        use chrono::NaiveDate;
        use serde::{Deserialize, Deserializer, Serializer, de};

        /// Serializes an optional date as `dd.MM.yyyy` or `null`.
        ///
        /// # Errors
        ///
        /// Returns the serializer's error when writing fails.
        pub fn serialize<S: Serializer>(
            date: &Option<NaiveDate>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match date {
                Some(value) => serializer.collect_str(&value.format(DEADLINE_FORMAT)),
                None => serializer.serialize_none(),
            }
        }

        /// Deserializes an optional date from `dd.MM.yyyy` or `null`.
        ///
        /// # Errors
        ///
        /// Returns a deserializer error when present text is not a valid
        /// date in that format.
        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<NaiveDate>, D::Error> {
            Option::<String>::deserialize(deserializer)?
                .map(|raw| NaiveDate::parse_from_str(&raw, DEADLINE_FORMAT))
                .transpose()
                .map_err(de::Error::custom)
        }
    }
}
