//! # HTTP Error Mapping
//!
//! Error types surfaced to HTTP clients, decoupled from any
//! validation-library error shape: the 400 body is the itemized
//! violation list, the 404 body is a fixed message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::schema::{ValidationError, Violation};
use crate::store::StoreError;

/// Result type for request handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors surfaced to HTTP clients.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Payload failed schema validation.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Referenced identifier is absent from the collection.
    #[error("Movie Not Found")]
    NotFound,

    /// The store could not be accessed.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => ApiError::NotFound,
            StoreError::LockPoisoned => ApiError::Internal(err.to_string()),
        }
    }
}

/// Body for validation failures: the itemized violations.
#[derive(Debug, Serialize)]
pub struct ValidationBody {
    pub error: Vec<Violation>,
}

/// Body for message-only responses.
#[derive(Debug, Clone, Serialize)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            ApiError::Validation(err) => (
                status,
                Json(ValidationBody {
                    error: err.violations,
                }),
            )
                .into_response(),
            ApiError::NotFound => {
                (status, Json(MessageBody::new("Movie Not Found"))).into_response()
            }
            ApiError::Internal(message) => (status, Json(MessageBody::new(message))).into_response(),
        }
    }
}
