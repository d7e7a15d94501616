//! Centralized error handling.
//!
//! Provides a unified error type for the entire application,
//! with automatic HTTP response conversion.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::domain::validation::FieldError;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// A request field failed its validation rule
    #[error("{0}")]
    Validation(FieldError),

    /// Request body or query string could not be decoded at all
    #[error("用户信息不合法")]
    MalformedInput,

    /// Registration attempted with a username that is already taken
    #[error("用户名已存在")]
    UsernameTaken,

    /// Login with a username/password pair that matches no stored user
    #[error("用户名或密码错误")]
    InvalidCredentials,

    /// Internal failure (details are logged, never sent to the client)
    #[error("Internal server error")]
    Internal(String),
}

/// Error response body: flat `{code, message}` carrying the numeric HTTP status
#[derive(Debug, Serialize)]
struct ErrorBody {
    code: u16,
    message: String,
}

impl AppError {
    /// Get HTTP status code
    fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::MalformedInput | AppError::UsernameTaken => {
                StatusCode::BAD_REQUEST
            }
            AppError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get user-facing message (hides internal details)
    fn user_message(&self) -> String {
        match self {
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "服务器内部错误".to_string()
            }
            _ => self.to_string(),
        }
    }
}

impl From<FieldError> for AppError {
    fn from(err: FieldError) -> Self {
        AppError::Validation(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            code: status.as_u16(),
            message: self.user_message(),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
