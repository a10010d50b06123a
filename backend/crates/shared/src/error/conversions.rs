//! Error conversions - From implementations for common error types
//!
//! Every conversion keeps the original error as `source` and exposes only a
//! generic localized message.

use super::app_error::AppError;
#[cfg(feature = "sqlx")]
use super::kind::ErrorKind;

// ============================================================================
// SQLx conversions (feature-gated)
// ============================================================================

/// Classify a database error: connectivity and resource exhaustion are
/// reported as 503, everything else as 500.
#[cfg(feature = "sqlx")]
pub fn sqlx_error_kind(err: &sqlx::Error) -> ErrorKind {
    match err {
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            ErrorKind::ServiceUnavailable
        }
        // https://www.postgresql.org/docs/current/errcodes-appendix.html
        sqlx::Error::Database(db_err) => match db_err.code().as_deref() {
            // Class 53 (Insufficient Resources), Class 57 (Operator Intervention)
            Some(code) if code.starts_with("53") || code.starts_with("57") => {
                ErrorKind::ServiceUnavailable
            }
            _ => ErrorKind::InternalServerError,
        },
        _ => ErrorKind::InternalServerError,
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        let app_err = match sqlx_error_kind(&err) {
            ErrorKind::ServiceUnavailable => AppError::service_unavailable(),
            _ => AppError::internal(),
        };
        app_err.with_source(err)
    }
}

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

#[cfg(feature = "axum")]
impl From<axum::extract::rejection::JsonRejection> for AppError {
    fn from(err: axum::extract::rejection::JsonRejection) -> Self {
        AppError::bad_request(crate::message::INVALID_REQUEST).with_source(err)
    }
}

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (status, Json(self.to_body())).into_response()
    }
}
