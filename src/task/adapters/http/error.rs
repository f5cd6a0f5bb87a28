//! Mapping of service errors onto HTTP responses.

use crate::task::services::TaskServiceError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::error;

impl IntoResponse for TaskServiceError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(err) => (
                StatusCode::BAD_REQUEST,
                format!("{}: {err}\n", err.field()),
            )
                .into_response(),
            Self::NotFound(_) => (StatusCode::NOT_FOUND, self.to_string()).into_response(),
            Self::Repository(err) => {
                error!(error = %err, "task storage failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "task storage is unavailable",
                )
                    .into_response()
            }
        }
    }
}
