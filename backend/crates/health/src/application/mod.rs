//! Application Layer

pub mod check_health;
pub mod config;

pub use check_health::CheckHealthUseCase;
pub use config::HealthConfig;
