//! Service layer for creating, revising, removing, and listing tasks.

use crate::task::{
    domain::{NewTask, TaskId, TaskQuery, TaskRequest, TaskResponse, TaskValidationError},
    ports::{TaskRepository, TaskRepositoryError, TaskRequestValidator},
};
use chrono::NaiveDate;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

/// Service-level errors for task operations.
///
/// Callers can tell bad input ([`Self::Validation`]) apart from a missing
/// task ([`Self::NotFound`]) and from storage failures, which are passed
/// through untouched.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// The request failed validation.
    #[error(transparent)]
    Validation(#[from] TaskValidationError),
    /// No task has the requested identifier.
    #[error("task not found: {0}")]
    NotFound(TaskId),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task orchestration service.
pub struct TaskService<R, V, C>
where
    R: TaskRepository,
    V: TaskRequestValidator,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    validator: Arc<V>,
    clock: Arc<C>,
}

impl<R, V, C> Clone for TaskService<R, V, C>
where
    R: TaskRepository,
    V: TaskRequestValidator,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            validator: Arc::clone(&self.validator),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R, V, C> TaskService<R, V, C>
where
    R: TaskRepository,
    V: TaskRequestValidator,
    C: Clock + Send + Sync,
{
    /// Creates a new task service.
    #[must_use]
    pub const fn new(repository: Arc<R>, validator: Arc<V>, clock: Arc<C>) -> Self {
        Self {
            repository,
            validator,
            clock,
        }
    }

    /// Validates a request and stores it as a new task.
    ///
    /// A missing description is stored as the default placeholder and a
    /// missing status as `TODO`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Validation`] without touching storage when
    /// the request is invalid, or [`TaskServiceError::Repository`] when the
    /// insert fails.
    pub async fn create(&self, request: TaskRequest) -> TaskServiceResult<TaskResponse> {
        let draft = self
            .validator
            .validate(request, self.today())
            .inspect_err(|err| debug!(error = %err, "rejected task creation"))?;

        let task = self.repository.insert(NewTask::from_draft(draft)).await?;
        debug!(task_id = %task.id(), status = %task.status(), "task created");
        Ok(TaskResponse::from(task))
    }

    /// Replaces the fields of an existing task.
    ///
    /// The identifier is resolved before the request is validated, so a
    /// missing task is reported even when the request is also invalid. A
    /// missing status keeps the current one.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when no task has `id`,
    /// [`TaskServiceError::Validation`] when the request is invalid (nothing
    /// is saved in either case), or [`TaskServiceError::Repository`] when a
    /// repository call fails.
    pub async fn update(&self, id: TaskId, request: TaskRequest) -> TaskServiceResult<TaskResponse> {
        let mut task = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(TaskServiceError::NotFound(id))
            .inspect_err(|_| warn!(task_id = %id, "update of unknown task"))?;

        let draft = self
            .validator
            .validate(request, self.today())
            .inspect_err(|err| debug!(task_id = %id, error = %err, "rejected task update"))?;

        task.revise(draft);
        let saved = self.repository.save(&task).await?;
        debug!(task_id = %saved.id(), status = %saved.status(), "task updated");
        Ok(TaskResponse::from(saved))
    }

    /// Removes an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] without deleting anything when
    /// no task has `id`, or [`TaskServiceError::Repository`] when a
    /// repository call fails.
    pub async fn delete(&self, id: TaskId) -> TaskServiceResult<()> {
        if self.repository.find_by_id(id).await?.is_none() {
            warn!(task_id = %id, "delete of unknown task");
            return Err(TaskServiceError::NotFound(id));
        }
        self.repository.delete_by_id(id).await?;
        debug!(task_id = %id, "task deleted");
        Ok(())
    }

    /// Lists tasks, optionally filtered by status and ordered by a key.
    ///
    /// A status filter is delegated to the repository. Without a sort key
    /// the repository order is kept; with one the result is stably sorted,
    /// so tasks with equal keys keep their relative order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the lookup fails.
    pub async fn find_all(&self, query: TaskQuery) -> TaskServiceResult<Vec<TaskResponse>> {
        let mut tasks = match query.filter_by_status {
            Some(status) => self.repository.find_by_status(status).await?,
            None => self.repository.find_all().await?,
        };
        query.sort(&mut tasks);
        debug!(count = tasks.len(), ?query, "tasks listed");
        Ok(tasks.iter().map(TaskResponse::from).collect())
    }

    fn today(&self) -> NaiveDate {
        self.clock.local().date_naive()
    }
}
