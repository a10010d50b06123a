//! Check Health Use Case

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use crate::application::config::HealthConfig;
use crate::domain::probe::HealthProbe;
use crate::domain::report::{CheckStatus, HealthReport};
use crate::error::HealthResult;

pub struct CheckHealthUseCase<P>
where
    P: HealthProbe,
{
    probe: Arc<P>,
    config: Arc<HealthConfig>,
}

impl<P> CheckHealthUseCase<P>
where
    P: HealthProbe,
{
    pub fn new(probe: Arc<P>, config: Arc<HealthConfig>) -> Self {
        Self { probe, config }
    }

    /// Both checks run concurrently, so the worst case is one timeout.
    pub async fn execute(&self) -> HealthReport {
        let timeout = self.config.check_timeout;

        let (database, cache) = tokio::join!(
            bounded("database", timeout, self.probe.check_database()),
            bounded("cache", timeout, self.probe.check_cache()),
        );

        HealthReport { database, cache }
    }
}

async fn bounded<F>(name: &'static str, timeout: Duration, check: F) -> CheckStatus
where
    F: Future<Output = HealthResult<()>>,
{
    match tokio::time::timeout(timeout, check).await {
        Ok(Ok(())) => CheckStatus::Ok,
        Ok(Err(e)) => {
            tracing::warn!(check = name, error = %e, "Health check failed");
            CheckStatus::Error
        }
        Err(_) => {
            tracing::warn!(
                check = name,
                timeout_ms = timeout.as_millis() as u64,
                "Health check timed out"
            );
            CheckStatus::Timeout
        }
    }
}
