//! Health Router

use axum::{Router, routing::get};
use std::sync::Arc;

use crate::application::config::HealthConfig;
use crate::domain::probe::HealthProbe;
use crate::infra::probe::PgRedisProbe;
use crate::presentation::handlers::{self, HealthAppState};

/// Create the Health router with the Postgres/Redis probe
pub fn health_router(probe: PgRedisProbe, config: HealthConfig) -> Router {
    health_router_generic(probe, config)
}

/// Create a generic Health router for any probe implementation
pub fn health_router_generic<P>(probe: P, config: HealthConfig) -> Router
where
    P: HealthProbe + Clone + Send + Sync + 'static,
{
    let state = HealthAppState {
        probe: Arc::new(probe),
        config: Arc::new(config),
    };

    Router::new()
        .route("/", get(handlers::health::<P>))
        .with_state(state)
}
