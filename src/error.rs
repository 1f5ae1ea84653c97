//! Application error handling
//!
//! This module provides unified error handling for the API,
//! converting internal errors to appropriate HTTP responses.
//!
//! The auth endpoints respond with an `{"error": ...}` body and the task
//! endpoints with a `{"message": ...}` body; each variant knows which
//! surface it belongs to.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// API error type that can be converted to HTTP responses
#[derive(Error, Debug)]
pub enum ApiError {
    /// Malformed signup/login input, rejected before any storage access
    #[error("{0}")]
    Validation(String),

    /// Signup with an email that already has an identity
    #[error("Email already exists")]
    DuplicateEmail,

    /// Login email matches no identity
    #[error("User not found")]
    UserNotFound,

    /// Login password does not verify against the stored hash
    #[error("Wrong password")]
    WrongPassword,

    /// Missing, malformed, or unverifiable bearer credential
    #[error("{0}")]
    Unauthorized(String),

    /// Task id does not exist or belongs to another owner; the two cases
    /// are deliberately indistinguishable to the caller
    #[error("Task not found or unauthorized")]
    TaskNotFound,

    /// Malformed task input
    #[error("{0}")]
    BadRequest(String),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),

    #[error("Database error")]
    Database(#[from] sqlx::Error),
}

/// Error body for the auth endpoints
#[derive(Serialize)]
struct AuthErrorBody {
    error: String,
}

/// Error body for the task endpoints
#[derive(Serialize)]
struct MessageBody {
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(msg) => auth_error(StatusCode::BAD_REQUEST, msg),
            ApiError::DuplicateEmail | ApiError::UserNotFound | ApiError::WrongPassword => {
                auth_error(StatusCode::BAD_REQUEST, self.to_string())
            }
            ApiError::Unauthorized(msg) => message_error(StatusCode::UNAUTHORIZED, msg),
            ApiError::TaskNotFound => message_error(StatusCode::NOT_FOUND, self.to_string()),
            ApiError::BadRequest(msg) => message_error(StatusCode::BAD_REQUEST, msg),
            ApiError::Internal(err) => {
                error!("Internal error: {:?}", err);
                message_error(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            ApiError::Database(err) => {
                error!("Database error: {:?}", err);
                message_error(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        }
    }
}

fn auth_error(status: StatusCode, error: String) -> Response {
    (status, Json(AuthErrorBody { error })).into_response()
}

fn message_error(status: StatusCode, message: String) -> Response {
    (status, Json(MessageBody { message })).into_response()
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_status() {
        let error = ApiError::Validation("Invalid email".to_string());
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_duplicate_email_status() {
        let response = ApiError::DuplicateEmail.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_task_not_found_status() {
        let response = ApiError::TaskNotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_unauthorized_error_status() {
        let error = ApiError::Unauthorized("Invalid or expired token".to_string());
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_internal_error_hides_detail() {
        let error = ApiError::Internal(anyhow::anyhow!("connection refused to 10.0.0.3"));
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
