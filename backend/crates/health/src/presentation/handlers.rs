//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use chrono::{SecondsFormat, Utc};
use std::sync::Arc;

use crate::application::CheckHealthUseCase;
use crate::application::config::HealthConfig;
use crate::domain::probe::HealthProbe;
use crate::presentation::dto::HealthResponse;

/// Shared state for the health handler
#[derive(Clone)]
pub struct HealthAppState<P>
where
    P: HealthProbe + Clone + Send + Sync + 'static,
{
    pub probe: Arc<P>,
    pub config: Arc<HealthConfig>,
}

/// GET /api/health
pub async fn health<P>(
    State(state): State<HealthAppState<P>>,
) -> (StatusCode, Json<HealthResponse>)
where
    P: HealthProbe + Clone + Send + Sync + 'static,
{
    let report = CheckHealthUseCase::new(state.probe.clone(), state.config.clone())
        .execute()
        .await;

    let healthy = report.is_healthy();

    let response = HealthResponse {
        status: if healthy { "healthy" } else { "unhealthy" },
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        uptime: state.config.uptime_secs(),
        environment: state.config.environment.to_string(),
        version: state.config.version.clone(),
        checks: (!healthy).then(|| report.into()),
    };

    let status = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(response))
}
