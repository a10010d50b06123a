//! Router-level tests for the health endpoint over scripted probes

use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use platform::config::Environment;
use tower::ServiceExt;

use crate::application::config::HealthConfig;
use crate::domain::probe::HealthProbe;
use crate::error::{HealthError, HealthResult};
use crate::presentation::router::health_router_generic;

#[derive(Clone, Copy)]
enum Behavior {
    Ok,
    Fail,
    Hang,
}

#[derive(Clone, Copy)]
struct FakeProbe {
    database: Behavior,
    cache: Behavior,
}

async fn run(behavior: Behavior) -> HealthResult<()> {
    match behavior {
        Behavior::Ok => Ok(()),
        Behavior::Fail => Err(HealthError::UnexpectedResponse("LOADING".to_string())),
        Behavior::Hang => std::future::pending().await,
    }
}

impl HealthProbe for FakeProbe {
    async fn check_database(&self) -> HealthResult<()> {
        run(self.database).await
    }

    async fn check_cache(&self) -> HealthResult<()> {
        run(self.cache).await
    }
}

fn app(database: Behavior, cache: Behavior) -> Router {
    let config = HealthConfig {
        check_timeout: Duration::from_millis(50),
        environment: Environment::Test,
        version: "1.2.3".to_string(),
        ..Default::default()
    };

    Router::new().nest(
        "/api/health",
        health_router_generic(FakeProbe { database, cache }, config),
    )
}

async fn get_health(app: Router) -> Response {
    app.oneshot(
        Request::builder()
            .uri("/api/health")
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

async fn body_json(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_healthy_omits_checks() {
    let response = get_health(app(Behavior::Ok, Behavior::Ok)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["environment"], "test");
    assert_eq!(body["version"], "1.2.3");
    assert!(body["uptime"].as_f64().unwrap() >= 0.0);
    assert!(
        chrono::DateTime::parse_from_rfc3339(body["timestamp"].as_str().unwrap()).is_ok()
    );
    assert!(body.get("checks").is_none());
}

#[tokio::test]
async fn test_failed_cache_is_unavailable() {
    let response = get_health(app(Behavior::Ok, Behavior::Fail)).await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let body = body_json(response).await;
    assert_eq!(body["status"], "unhealthy");
    assert_eq!(
        body["checks"],
        serde_json::json!({ "database": "ok", "cache": "error" })
    );
}

#[tokio::test]
async fn test_hanging_database_times_out() {
    let started = std::time::Instant::now();
    let response = get_health(app(Behavior::Hang, Behavior::Ok)).await;

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert!(started.elapsed() < Duration::from_secs(2));
    assert_eq!(
        body_json(response).await["checks"],
        serde_json::json!({ "database": "timeout", "cache": "ok" })
    );
}

#[tokio::test]
async fn test_both_hanging_share_one_timeout() {
    let started = std::time::Instant::now();
    let response = get_health(app(Behavior::Hang, Behavior::Hang)).await;

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    // Concurrent, so well under two full timeouts plus slack
    assert!(started.elapsed() < Duration::from_secs(1));
    assert_eq!(
        body_json(response).await["checks"],
        serde_json::json!({ "database": "timeout", "cache": "timeout" })
    );
}
