//! Probe Trait

use crate::error::HealthResult;

/// One cheap round trip per dependency
#[trait_variant::make(HealthProbe: Send)]
pub trait LocalHealthProbe {
    async fn check_database(&self) -> HealthResult<()>;

    async fn check_cache(&self) -> HealthResult<()>;
}
