use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::error;

use chirp_service::ServiceError;

/// Everything a handler can fail with. `IntoResponse` below is the only
/// place a [`ServiceError`] turns into a status code.
#[derive(Debug)]
pub enum ApiError {
    Service(ServiceError),
    /// The blocking task was cancelled or panicked.
    TaskFailed,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::Service(ServiceError::Invalid(reason)) => (StatusCode::BAD_REQUEST, reason),
            // Updating a missing message is reported as a bad request,
            // not a 404.
            ApiError::Service(ServiceError::NotFound(reason)) => (StatusCode::BAD_REQUEST, reason),
            ApiError::Service(err @ ServiceError::Unauthorized) => {
                (StatusCode::UNAUTHORIZED, err.to_string())
            }
            ApiError::Service(ServiceError::Conflict(reason)) => (StatusCode::CONFLICT, reason),
            ApiError::Service(ServiceError::Store(err)) => {
                error!("store failure: {err}");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal error".to_string())
            }
            ApiError::TaskFailed => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal error".to_string())
            }
        };
        (status, body).into_response()
    }
}
