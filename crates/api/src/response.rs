//! Response envelope shared by every API endpoint.
//!
//! ```json
//! { "success": true, "message": "...", "data": { ... }, "timestamp": "2025-01-01T00:00:00Z" }
//! ```
//!
//! Failures carry `"data": null`. Use [`respond`] to render a service
//! [`Outcome`] rather than building the envelope by hand.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use franchise_core::outcome::Outcome;
use franchise_core::types::Timestamp;
use serde::{Deserialize, Serialize};

use crate::error::status_for;

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,
    pub data: Option<T>,
    pub timestamp: Timestamp,
}

impl<T> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
            timestamp: Utc::now(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
            timestamp: Utc::now(),
        }
    }
}

impl<T> From<Outcome<T>> for ApiResponse<T> {
    fn from(outcome: Outcome<T>) -> Self {
        match outcome {
            Outcome::Success { message, data } => ApiResponse::success(message, data),
            Outcome::Failure { message, .. } => ApiResponse::failure(message),
        }
    }
}

/// Render an outcome, answering `success_status` on success and the
/// failure kind's status otherwise.
pub fn respond<T: Serialize>(outcome: Outcome<T>, success_status: StatusCode) -> Response {
    let status = outcome.failure_kind().map_or(success_status, status_for);
    (status, Json(ApiResponse::from(outcome))).into_response()
}
