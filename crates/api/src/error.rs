use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use franchise_core::outcome::FailureKind;

use crate::response::ApiResponse;

/// Rejection type for requests that never reach a service (malformed JSON,
/// bad path segments), rendered in the same envelope as service failures.
///
/// Domain failures travel inside an `Outcome` and are rendered by
/// [`crate::response::respond`].
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A request the extractors could not decode.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// HTTP status for a failed operation.
pub fn status_for(kind: FailureKind) -> StatusCode {
    match kind {
        FailureKind::NotFound => StatusCode::NOT_FOUND,
        FailureKind::DuplicateName => StatusCode::CONFLICT,
        FailureKind::Validation => StatusCode::BAD_REQUEST,
        FailureKind::StorageFailure => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
        };

        (status, axum::Json(ApiResponse::<()>::failure(self.to_string()))).into_response()
    }
}
