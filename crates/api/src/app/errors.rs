//! Request-level errors with HTTP response mapping.
//!
//! Error bodies are the plain human-readable message string only; no
//! internal identifiers or structure ever leak to the client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use sweetshop_auth::{AuthError, AuthzError};
use sweetshop_core::DomainError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Malformed or out-of-range input; also covers insufficient stock,
    /// which the client retries with a smaller amount.
    BadRequest(String),
    /// Missing or invalid token, or bad login credentials.
    Unauthorized(String),
    /// The caller's role lacks permission.
    Forbidden(String),
    /// The identifier does not exist.
    NotFound(String),
    /// Unexpected internal failure.
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal error".to_string())
            }
        };

        (status, message).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(_) | DomainError::InvalidId(_) => {
                ApiError::BadRequest(err.to_string())
            }
            // An over-large purchase is a plain 400, distinct only by
            // its message; clients retry with a smaller amount.
            DomainError::InsufficientStock(_) => ApiError::BadRequest(err.to_string()),
            DomainError::NotFound(_) => ApiError::NotFound(err.to_string()),
        }
    }
}

impl From<AuthzError> for ApiError {
    fn from(err: AuthzError) -> Self {
        ApiError::Forbidden(err.to_string())
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::EmailTaken | AuthError::Validation(_) => {
                ApiError::BadRequest(err.to_string())
            }
            AuthError::InvalidCredentials => ApiError::Unauthorized(err.to_string()),
            AuthError::Hashing => ApiError::Internal(err.to_string()),
        }
    }
}

impl From<sweetshop_auth::TokenError> for ApiError {
    fn from(err: sweetshop_auth::TokenError) -> Self {
        match err {
            sweetshop_auth::TokenError::Expired => {
                ApiError::Unauthorized("token has expired".to_string())
            }
            sweetshop_auth::TokenError::Invalid => {
                ApiError::Unauthorized("invalid token".to_string())
            }
            sweetshop_auth::TokenError::Encoding => ApiError::Internal(err.to_string()),
        }
    }
}
