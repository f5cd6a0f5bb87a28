//! List query parameters and the orderings they select.

use super::{Task, TaskStatus};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Field a task list is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortBy {
    /// Order by [`TaskStatus::rank`].
    Status,
    /// Order by deadline date.
    Deadline,
}

impl SortBy {
    /// Compares two tasks on this key in ascending order.
    #[must_use]
    pub fn compare(self, left: &Task, right: &Task) -> Ordering {
        match self {
            Self::Status => left.status().rank().cmp(&right.status().rank()),
            Self::Deadline => left.deadline().cmp(&right.deadline()),
        }
    }
}

/// Direction a task list is ordered in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortDirection {
    /// Smallest key first.
    #[default]
    Asc,
    /// Largest key first.
    Desc,
}

impl SortDirection {
    /// Applies the direction to an ascending comparison result.
    #[must_use]
    pub const fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}

/// Filter and ordering options for listing tasks.
///
/// Every field is optional: no filter returns every task and no sort key
/// keeps the order the store returned. A sort key without a direction sorts
/// ascending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskQuery {
    /// Only return tasks with this status.
    #[serde(default)]
    pub filter_by_status: Option<TaskStatus>,
    /// Key to order the result by.
    #[serde(default)]
    pub sort_by: Option<SortBy>,
    /// Direction of the ordering.
    #[serde(default)]
    pub sort_direction: Option<SortDirection>,
}

impl TaskQuery {
    /// Creates a query with no filter and no ordering.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            filter_by_status: None,
            sort_by: None,
            sort_direction: None,
        }
    }

    /// Restricts the result to tasks with the given status.
    #[must_use]
    pub const fn filtered_by(mut self, status: TaskStatus) -> Self {
        self.filter_by_status = Some(status);
        self
    }

    /// Orders the result by the given key and direction.
    #[must_use]
    pub const fn sorted_by(mut self, sort_by: SortBy, direction: SortDirection) -> Self {
        self.sort_by = Some(sort_by);
        self.sort_direction = Some(direction);
        self
    }

    /// Sorts tasks in place according to this query.
    ///
    /// The sort is stable, so tasks with equal keys keep their relative
    /// order in both directions.
    pub fn sort(&self, tasks: &mut [Task]) {
        let Some(sort_by) = self.sort_by else {
            return;
        };
        let direction = self.sort_direction.unwrap_or_default();
        tasks.sort_by(|left, right| direction.apply(sort_by.compare(left, right)));
    }
}
