//! HTTP Error Handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::application::ports::{FetchError, UserStoreError};

/// Uniform JSON error body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Fixed plain-text body for proxy failures.
pub const UPSTREAM_ERROR_BODY: &str = "Failed to fetch document from upstream.";

/// API error
///
/// Status-code translation lives here and nowhere else; components report
/// typed outcomes and the handlers convert them via `From`/`?`.
#[derive(Debug)]
pub enum ApiError {
    /// Absent lookup. Expected outcome, never logged as an error.
    NotFound(String),
    /// Request validation failure.
    BadRequest(String),
    /// Uniqueness violation.
    Conflict(String),
    /// The outbound document fetch failed.
    Upstream(String),
    /// Any other fault caught at the handler boundary.
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(msg) => {
                tracing::warn!(error = %msg, "Resource not found");
                (StatusCode::NOT_FOUND, Json(ErrorBody::new(msg))).into_response()
            }
            ApiError::BadRequest(msg) => {
                tracing::warn!(error = %msg, "Bad request");
                (StatusCode::BAD_REQUEST, Json(ErrorBody::new(msg))).into_response()
            }
            ApiError::Conflict(msg) => {
                tracing::warn!(error = %msg, "Resource conflict");
                (StatusCode::CONFLICT, Json(ErrorBody::new(msg))).into_response()
            }
            ApiError::Upstream(msg) => {
                tracing::error!(error = %msg, "Upstream fetch failed");
                // Plain text, not JSON: the /resource endpoint serves binary
                // documents and its failure body is a fixed text message.
                (StatusCode::INTERNAL_SERVER_ERROR, UPSTREAM_ERROR_BODY).into_response()
            }
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorBody::new("Internal server error")),
                )
                    .into_response()
            }
        }
    }
}

impl From<UserStoreError> for ApiError {
    fn from(e: UserStoreError) -> Self {
        match e {
            UserStoreError::DuplicateUsername(_) => {
                ApiError::Conflict("Username already exists".to_string())
            }
        }
    }
}

impl From<FetchError> for ApiError {
    fn from(e: FetchError) -> Self {
        ApiError::Upstream(e.to_string())
    }
}
