//! Custom error types for the exercise API

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use common::error::DatabaseError;
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Custom error type for the exercise API
#[derive(Error, Debug)]
pub enum ApiError {
    /// Missing or malformed request input
    #[error("Validation error: {0}")]
    Validation(String),

    /// A referenced resource does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Any failure of the backing store
    #[error("Store error: {0}")]
    Store(#[from] DatabaseError),
}

impl ApiError {
    /// The error returned whenever a user id cannot be resolved
    pub fn user_not_found() -> Self {
        ApiError::NotFound("User not found".to_string())
    }

    fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error_message = match self {
            ApiError::Validation(msg) | ApiError::NotFound(msg) => msg,
            ApiError::Store(e) => {
                error!("Store operation failed: {}", e);
                "Database error".to_string()
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;
