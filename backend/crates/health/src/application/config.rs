//! Application Configuration

use std::time::{Duration, Instant};

use platform::config::Environment;

/// Health application configuration
#[derive(Debug, Clone)]
pub struct HealthConfig {
    /// Upper bound for each dependency check
    pub check_timeout: Duration,
    /// Reported as `environment`
    pub environment: Environment,
    /// Reported as `version`; the binary sets its own package version
    pub version: String,
    /// Uptime is measured from here
    pub started_at: Instant,
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self {
            check_timeout: Duration::from_millis(3000),
            environment: Environment::default(),
            version: String::from("unknown"),
            started_at: Instant::now(),
        }
    }
}

impl HealthConfig {
    /// Seconds since `started_at`
    pub fn uptime_secs(&self) -> f64 {
        self.started_at.elapsed().as_secs_f64()
    }
}
