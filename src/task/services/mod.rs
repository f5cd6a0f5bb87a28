//! Application services for task management.

mod task_service;

pub use task_service::{TaskService, TaskServiceError, TaskServiceResult};
