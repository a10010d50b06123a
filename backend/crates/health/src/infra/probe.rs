//! Postgres and Redis probes

use std::sync::Arc;

use redis::aio::ConnectionManager;
use sqlx::PgPool;
use tokio::sync::Mutex;

use crate::domain::probe::HealthProbe;
use crate::error::{HealthError, HealthResult};

/// Probes the shared pool and the cache
///
/// The cache connection is opened on first use and kept afterwards, so an
/// unreachable Redis shows up as a failed check instead of a startup error.
#[derive(Clone)]
pub struct PgRedisProbe {
    pool: PgPool,
    redis: redis::Client,
    manager: Arc<Mutex<Option<ConnectionManager>>>,
}

impl PgRedisProbe {
    pub fn new(pool: PgPool, redis: redis::Client) -> Self {
        Self {
            pool,
            redis,
            manager: Arc::new(Mutex::new(None)),
        }
    }

    async fn connection(&self) -> HealthResult<ConnectionManager> {
        let mut manager = self.manager.lock().await;

        if let Some(conn) = manager.as_ref() {
            return Ok(conn.clone());
        }

        let conn = ConnectionManager::new(self.redis.clone()).await?;
        *manager = Some(conn.clone());

        Ok(conn)
    }
}

impl HealthProbe for PgRedisProbe {
    async fn check_database(&self) -> HealthResult<()> {
        // Touches a real table, so a missing schema fails too
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;

        Ok(())
    }

    async fn check_cache(&self) -> HealthResult<()> {
        let mut conn = self.connection().await?;
        let pong: String = redis::cmd("PING").query_async(&mut conn).await?;

        if pong != "PONG" {
            return Err(HealthError::UnexpectedResponse(pong));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::postgres::PgPoolOptions;

    fn unreachable_probe() -> PgRedisProbe {
        let pool = PgPoolOptions::new()
            .connect_lazy("postgres://health@127.0.0.1:1/health")
            .unwrap();
        // Port 1 refuses connections
        let redis = redis::Client::open("redis://127.0.0.1:1/").unwrap();

        PgRedisProbe::new(pool, redis)
    }

    #[tokio::test]
    async fn test_construction_does_not_connect() {
        let probe = unreachable_probe();
        assert!(probe.manager.lock().await.is_none());
    }

    #[tokio::test]
    async fn test_unreachable_dependencies_report_unhealthy() {
        use crate::application::config::HealthConfig;
        use crate::presentation::router::health_router_generic;
        use axum::body::Body;
        use axum::http::{Request, StatusCode};
        use std::time::Duration;
        use tower::ServiceExt;

        let config = HealthConfig {
            check_timeout: Duration::from_millis(200),
            ..Default::default()
        };

        let response = health_router_generic(unreachable_probe(), config)
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "unhealthy");
        assert_ne!(body["checks"]["cache"], "ok");
        assert_ne!(body["checks"]["database"], "ok");
    }
}
