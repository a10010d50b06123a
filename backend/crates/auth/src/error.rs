//! Auth Error Types
//!
//! Auth-specific error variants that render through the unified
//! `kernel::error::AppError` envelope.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, conversions::sqlx_error_kind, kind::ErrorKind};
use kernel::message;
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Shown when email or password is blank
pub const MISSING_CREDENTIALS: &str = "이메일과 비밀번호를 입력해 주세요.";

/// Shown for unknown email and wrong password alike
pub const INVALID_CREDENTIALS: &str = "이메일 또는 비밀번호가 올바르지 않습니다.";

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Email or password missing from the login request
    #[error("Missing credentials")]
    MissingCredentials,

    /// Unknown email or wrong password
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Token missing, forged, or pointing at an unknown or expired session
    #[error("Session not found or expired")]
    SessionInvalid,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::MissingCredentials => ErrorKind::BadRequest,
            AuthError::InvalidCredentials | AuthError::SessionInvalid => ErrorKind::Unauthorized,
            AuthError::Database(e) => sqlx_error_kind(e),
            AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Localized message safe to send to the caller
    pub fn public_message(&self) -> &'static str {
        match self {
            AuthError::MissingCredentials => MISSING_CREDENTIALS,
            AuthError::InvalidCredentials => INVALID_CREDENTIALS,
            AuthError::SessionInvalid => message::UNAUTHORIZED,
            AuthError::Database(e) => match sqlx_error_kind(e) {
                ErrorKind::ServiceUnavailable => message::SERVICE_UNAVAILABLE,
                _ => message::INTERNAL_ERROR,
            },
            AuthError::Internal(_) => message::INTERNAL_ERROR,
        }
    }

    /// Convert to AppError, keeping database errors as the source
    pub fn into_app_error(self) -> AppError {
        match self {
            AuthError::Database(e) => AppError::from(e),
            other => AppError::new(other.kind(), other.public_message()),
        }
    }

    /// Log the error with appropriate level
    pub fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.into_app_error().into_response()
    }
}
