//! Health Backend Module
//!
//! `GET /api/health` for external monitors. Probes Postgres and Redis
//! concurrently, each bounded by a timeout, and answers 503 when either
//! dependency is down. No authentication.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::HealthConfig;
pub use error::{HealthError, HealthResult};
pub use infra::probe::PgRedisProbe;
pub use presentation::router::health_router;

#[cfg(test)]
mod tests;
