//! Application Error Types
//!
//! Centralized error handling with Axum integration.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use super::validation::ValidationError;

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Validation error: {0}")]
    Validation(ValidationError),
}

/// Body message for every 5xx response.
pub const SERVER_FAILURE_MESSAGE: &str = "terjadi kegagalan pada server kami";

impl AppError {
    pub fn thread_not_found() -> Self {
        AppError::NotFound("thread tidak ditemukan".into())
    }

    pub fn comment_not_found() -> Self {
        AppError::NotFound("komentar tidak ditemukan".into())
    }

    pub fn comment_reply_not_found() -> Self {
        AppError::NotFound("balasan komentar tidak ditemukan".into())
    }

    pub fn not_owner() -> Self {
        AppError::Forbidden("Anda tidak berhak mengakses resource ini".into())
    }

    /// HTTP status this error is reported with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::Internal(_) | AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body
///
/// `status` is `"fail"` for client errors and `"error"` for server errors.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub status: &'static str,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let message = match &self {
            AppError::NotFound(msg)
            | AppError::BadRequest(msg)
            | AppError::Unauthorized(msg)
            | AppError::Forbidden(msg) => msg.clone(),
            AppError::Validation(err) => err.user_message(),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                SERVER_FAILURE_MESSAGE.into()
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {}", e);
                SERVER_FAILURE_MESSAGE.into()
            }
        };

        let body = ErrorResponse {
            status: if status.is_server_error() { "error" } else { "fail" },
            message,
        };

        (status, Json(body)).into_response()
    }
}
