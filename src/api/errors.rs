//! # API Errors
//!
//! Boundary error type for the HTTP surface. Service errors pass
//! through with their codes intact; the two boundary-only cases are an
//! unparseable path id (treated as not-found so id formats stay
//! opaque) and a malformed request body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::directory::DirectoryError;
use crate::observability::{log_event_with_fields, Event};

use super::response::ErrorBody;

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// HTTP boundary errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// Service-level failure, code passes through
    #[error("{0}")]
    Directory(#[from] DirectoryError),

    /// Path id that does not name any record
    #[error("Partner not found: {0}")]
    UnknownId(String),

    /// Body that could not be deserialized
    #[error("Invalid request body: {0}")]
    InvalidBody(String),
}

impl ApiError {
    /// Stable machine-readable error code
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Directory(inner) => inner.code(),
            ApiError::UnknownId(_) => "PARTNER_NOT_FOUND",
            ApiError::InvalidBody(_) => "INVALID_BODY",
        }
    }

    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Directory(DirectoryError::Validation(_)) => StatusCode::BAD_REQUEST,
            ApiError::Directory(DirectoryError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Directory(DirectoryError::Store(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::UnknownId(_) => StatusCode::NOT_FOUND,
            ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Storage detail is logged here and never reaches the client
        match &self {
            ApiError::Directory(DirectoryError::Store(inner)) => {
                let detail = inner.to_string();
                log_event_with_fields(Event::StoreFailure, &[("detail", &detail)]);
            }
            ApiError::Directory(DirectoryError::Validation(_)) | ApiError::InvalidBody(_) => {
                let detail = self.to_string();
                log_event_with_fields(Event::ValidationRejected, &[("detail", &detail)]);
            }
            _ => {}
        }

        let status = self.status_code();
        let body = Json(ErrorBody::new(self.code(), self.to_string()));
        (status, body).into_response()
    }
}
