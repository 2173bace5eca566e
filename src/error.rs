//! Application error type and its HTTP representation.
//!
//! Every handler and middleware returns [`AppError`] on failure. The response body is
//! always the same envelope:
//!
//! ```json
//! { "error": "User not found" }
//! ```
//!
//! Only two status codes are produced: `400 Bad Request` for validation and
//! data-access failures, `401 Unauthorized` for rejected credentials.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::utils::params::ValidationError;

/// Message returned when a user id does not exist in the store.
pub const USER_NOT_FOUND: &str = "User not found";

/// Message returned when the email unique constraint is violated.
pub const EMAIL_TAKEN: &str = "A user with this email already exists";

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    /// Missing or malformed input, detected before the store is touched.
    #[error("{0}")]
    Validation(String),
    /// Any failure raised by the user store, including "not found".
    #[error("{0}")]
    DataAccess(String),
    /// Missing, invalid or insufficient credentials.
    #[error("{0}")]
    Unauthorized(String),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn data_access(message: impl Into<String>) -> Self {
        Self::DataAccess(message.into())
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized(message.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::DataAccess(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(e: ValidationError) -> Self {
        AppError::Validation(e.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        AppError::Validation(e.to_string())
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error()
            && db.is_unique_violation()
        {
            return AppError::DataAccess(EMAIL_TAKEN.to_string());
        }

        tracing::debug!(error = %e, "database error");
        AppError::DataAccess("Database error".to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        match &self {
            AppError::DataAccess(message) => {
                tracing::error!(status = status.as_u16(), error = %message, "request failed")
            }
            AppError::Validation(message) | AppError::Unauthorized(message) => {
                tracing::warn!(status = status.as_u16(), error = %message, "request rejected")
            }
        }

        let body = ErrorBody {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
