//! Notification Error Types

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, conversions::sqlx_error_kind, kind::ErrorKind};
use kernel::message;
use thiserror::Error;

/// Notification-specific result type alias
pub type NotificationResult<T> = Result<T, NotificationError>;

pub const MISSING_ID: &str = "알림 ID가 필요합니다.";
pub const NOT_FOUND: &str = "알림을 찾을 수 없습니다.";

#[derive(Debug, Error)]
pub enum NotificationError {
    /// Path id is blank
    #[error("Notification id is required")]
    MissingId,

    /// No such notification for this user (also covers malformed ids)
    #[error("Notification not found")]
    NotFound,

    /// Query string could not be parsed
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl NotificationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            NotificationError::MissingId | NotificationError::InvalidQuery(_) => {
                ErrorKind::BadRequest
            }
            NotificationError::NotFound => ErrorKind::NotFound,
            NotificationError::Database(e) => sqlx_error_kind(e),
        }
    }

    /// Localized message safe to send to the caller
    pub fn public_message(&self) -> &'static str {
        match self {
            NotificationError::MissingId => MISSING_ID,
            NotificationError::NotFound => NOT_FOUND,
            NotificationError::InvalidQuery(_) => message::INVALID_REQUEST,
            NotificationError::Database(e) => match sqlx_error_kind(e) {
                ErrorKind::ServiceUnavailable => message::SERVICE_UNAVAILABLE,
                _ => message::INTERNAL_ERROR,
            },
        }
    }

    pub fn into_app_error(self) -> AppError {
        match self {
            NotificationError::Database(e) => AppError::from(e),
            other => AppError::new(other.kind(), other.public_message()),
        }
    }

    fn log(&self) {
        match self {
            NotificationError::Database(e) => {
                tracing::error!(error = %e, "Notification database error");
            }
            _ => {
                tracing::debug!(error = %self, "Notification request rejected");
            }
        }
    }
}

impl IntoResponse for NotificationError {
    fn into_response(self) -> Response {
        self.log();
        self.into_app_error().into_response()
    }
}
