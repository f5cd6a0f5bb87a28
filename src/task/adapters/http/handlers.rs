//! Request handlers mapping HTTP calls onto [`TaskService`] operations.

use crate::task::{
    domain::{TaskId, TaskQuery, TaskRequest, TaskResponse},
    ports::{TaskRepository, TaskRequestValidator},
    services::{TaskService, TaskServiceResult},
};
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use mockable::Clock;
use serde::Deserialize;

/// `?id=N` query parameter identifying a task.
#[derive(Debug, Deserialize)]
pub(super) struct TaskIdParam {
    id: TaskId,
}

pub(super) async fn create_task<R, V, C>(
    State(service): State<TaskService<R, V, C>>,
    Json(request): Json<TaskRequest>,
) -> TaskServiceResult<Json<TaskResponse>>
where
    R: TaskRepository + 'static,
    V: TaskRequestValidator + 'static,
    C: Clock + Send + Sync + 'static,
{
    service.create(request).await.map(Json)
}

pub(super) async fn update_task<R, V, C>(
    State(service): State<TaskService<R, V, C>>,
    Query(param): Query<TaskIdParam>,
    Json(request): Json<TaskRequest>,
) -> TaskServiceResult<Json<TaskResponse>>
where
    R: TaskRepository + 'static,
    V: TaskRequestValidator + 'static,
    C: Clock + Send + Sync + 'static,
{
    service.update(param.id, request).await.map(Json)
}

pub(super) async fn delete_task<R, V, C>(
    State(service): State<TaskService<R, V, C>>,
    Query(param): Query<TaskIdParam>,
) -> TaskServiceResult<StatusCode>
where
    R: TaskRepository + 'static,
    V: TaskRequestValidator + 'static,
    C: Clock + Send + Sync + 'static,
{
    service.delete(param.id).await?;
    Ok(StatusCode::OK)
}

pub(super) async fn list_tasks<R, V, C>(
    State(service): State<TaskService<R, V, C>>,
    Query(query): Query<TaskQuery>,
) -> TaskServiceResult<Json<Vec<TaskResponse>>>
where
    R: TaskRepository + 'static,
    V: TaskRequestValidator + 'static,
    C: Clock + Send + Sync + 'static,
{
    service.find_all(query).await.map(Json)
}

pub(super) async fn health() -> &'static str {
    "OK"
}
