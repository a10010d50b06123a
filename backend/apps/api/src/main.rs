//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

mod config;
mod router;

use std::net::SocketAddr;
use std::sync::Arc;

use auth::domain::AuthSessionRepository;
use auth::{AuthConfig, AuthMiddlewareState, PgAuthRepository, auth_router};
use axum::http::{self, Method, header};
use health::domain::HealthProbe;
use health::{PgRedisProbe, health_router};
use link::{PgLinkRepository, link_router};
use notification::{NotificationConfig, PgNotificationRepository, notification_router};
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{AppConfig, LogFormat};
use crate::router::{Routes, compose};

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

const DEFAULT_LOG_FILTER: &str =
    "api=info,auth=info,notification=info,link=info,health=info,tower_http=info";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env()?;

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());
    let registry = tracing_subscriber::registry().with(filter);
    match config.log_format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }

    tracing::info!(environment = %config.environment, "Starting API server");

    // Database connection
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    // Redis only backs the health probe; it connects on first check
    let probe = PgRedisProbe::new(pool.clone(), redis::Client::open(config.redis_url.as_str())?);
    match tokio::time::timeout(config.health_check_timeout, probe.check_cache()).await {
        Ok(Ok(())) => tracing::info!("Connected to redis"),
        Ok(Err(e)) => {
            tracing::warn!(error = %e, "Redis unavailable, health will report the cache as down")
        }
        Err(_) => tracing::warn!("Redis did not answer in time, continuing anyway"),
    }

    // Startup cleanup: remove expired sessions
    // Errors here should not prevent server startup
    let auth_repo = PgAuthRepository::new(pool.clone());
    match auth_repo.cleanup_expired().await {
        Ok(sessions) => {
            tracing::info!(
                sessions_deleted = sessions,
                "Auth session cleanup completed"
            );
        }
        Err(e) => {
            tracing::warn!(
                error = %e,
                "Auth session cleanup failed, continuing anyway"
            );
        }
    }

    // Auth configuration
    let session_secret = match config.session_secret {
        Some(secret) => secret,
        None => {
            tracing::warn!("AUTH_TOKEN_SECRET not set, sessions will not survive a restart");
            platform::crypto::random_key()
        }
    };
    let auth_config = Arc::new(AuthConfig::for_environment(
        config.environment,
        session_secret,
        config.session_ttl,
    ));

    // CORS configuration
    let allowed_origins: Vec<http::HeaderValue> = config
        .frontend_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
        .allow_credentials(true);

    // Build router
    let routes = Routes {
        auth: auth_router(auth_repo.clone(), auth_config.clone()),
        notifications: notification_router(
            PgNotificationRepository::new(pool.clone()),
            NotificationConfig::default(),
        ),
        health: health_router(probe, config.health_config()),
        links: link_router(PgLinkRepository::new(pool), config.link_config()),
    };

    let app = compose(routes, AuthMiddlewareState::new(auth_repo, auth_config))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
