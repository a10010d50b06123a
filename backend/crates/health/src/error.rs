//! Health Error Types
//!
//! Probe failures never reach the caller as errors; they are folded into
//! the report as `error` or `timeout`.

use thiserror::Error;

pub type HealthResult<T> = Result<T, HealthError>;

#[derive(Debug, Error)]
pub enum HealthError {
    #[error("Database check failed: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Cache check failed: {0}")]
    Cache(#[from] redis::RedisError),

    /// Dependency answered but not as expected
    #[error("Unexpected probe response: {0}")]
    UnexpectedResponse(String),
}
