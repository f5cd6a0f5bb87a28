//! HTTP transport for the task service.
//!
//! Routes:
//!
//! | Method   | Path          | Input                                          |
//! |----------|---------------|------------------------------------------------|
//! | `POST`   | `/tasks`      | JSON [`TaskRequest`](crate::task::domain::TaskRequest) |
//! | `PUT`    | `/tasks?id=N` | JSON [`TaskRequest`](crate::task::domain::TaskRequest) |
//! | `DELETE` | `/tasks?id=N` |                                                |
//! | `GET`    | `/tasks`      | optional `filterByStatus`, `sortBy`, `sortDirection` |
//! | `GET`    | `/health`     |                                                |
//!
//! Deadlines travel as `dd.MM.yyyy` text and statuses as `TODO`,
//! `IN_PROGRESS`, or `DONE`.

mod error;
mod handlers;

use crate::task::{
    ports::{TaskRepository, TaskRequestValidator},
    services::TaskService,
};
use axum::{Router, routing::get};
use mockable::Clock;
use tower_http::trace::TraceLayer;

/// Builds the task API router around a service.
pub fn router<R, V, C>(service: TaskService<R, V, C>) -> Router
where
    R: TaskRepository + 'static,
    V: TaskRequestValidator + 'static,
    C: Clock + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/tasks",
            get(handlers::list_tasks::<R, V, C>)
                .post(handlers::create_task::<R, V, C>)
                .put(handlers::update_task::<R, V, C>)
                .delete(handlers::delete_task::<R, V, C>),
        )
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}
