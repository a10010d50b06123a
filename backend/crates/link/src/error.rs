//! Link Error Types

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, conversions::sqlx_error_kind, kind::ErrorKind};
use kernel::message;
use thiserror::Error;

/// Link-specific result type alias
pub type LinkResult<T> = Result<T, LinkError>;

pub const MISSING_CODE: &str = "단축 코드가 필요합니다.";
pub const NOT_FOUND: &str = "링크를 찾을 수 없습니다.";
pub const EXPIRED: &str = "만료된 링크입니다.";

#[derive(Debug, Error)]
pub enum LinkError {
    /// Path code is blank
    #[error("Short code is required")]
    MissingCode,

    /// No record has this short or custom code
    #[error("Short code not found: {0}")]
    NotFound(String),

    /// Record exists but `expires_at` has passed
    #[error("Short code expired: {0}")]
    Expired(String),

    /// Configured QR endpoint or base URL does not form a valid URL
    #[error("Invalid redirect URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl LinkError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LinkError::MissingCode => ErrorKind::BadRequest,
            LinkError::NotFound(_) => ErrorKind::NotFound,
            LinkError::Expired(_) => ErrorKind::Gone,
            LinkError::InvalidUrl(_) => ErrorKind::InternalServerError,
            LinkError::Database(e) => sqlx_error_kind(e),
        }
    }

    /// Localized message safe to send to the caller
    pub fn public_message(&self) -> &'static str {
        match self {
            LinkError::MissingCode => MISSING_CODE,
            LinkError::NotFound(_) => NOT_FOUND,
            LinkError::Expired(_) => EXPIRED,
            LinkError::InvalidUrl(_) => message::INTERNAL_ERROR,
            LinkError::Database(e) => match sqlx_error_kind(e) {
                ErrorKind::ServiceUnavailable => message::SERVICE_UNAVAILABLE,
                _ => message::INTERNAL_ERROR,
            },
        }
    }

    pub fn into_app_error(self) -> AppError {
        match self {
            LinkError::Database(e) => AppError::from(e),
            LinkError::InvalidUrl(e) => AppError::internal().with_source(e),
            other => AppError::new(other.kind(), other.public_message()),
        }
    }

    fn log(&self) {
        match self {
            LinkError::Database(e) => {
                tracing::error!(error = %e, "Link database error");
            }
            LinkError::InvalidUrl(e) => {
                tracing::error!(error = %e, "Failed to build redirect URL");
            }
            _ => {
                tracing::debug!(error = %self, "Link request rejected");
            }
        }
    }
}

impl IntoResponse for LinkError {
    fn into_response(self) -> Response {
        self.log();
        self.into_app_error().into_response()
    }
}
