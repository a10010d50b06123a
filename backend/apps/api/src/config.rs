//! Startup Configuration
//!
//! Everything is read from the environment once, before any connection is
//! opened. A `.env` file is honored in development.

use std::time::Duration;

use anyhow::{Context, bail};
use health::HealthConfig;
use link::LinkConfig;
use platform::config::Environment;

const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:3000,http://127.0.0.1:3000";
const DEFAULT_BASE_URL: &str = "http://localhost:3000";
const DEFAULT_SESSION_TTL_HOURS: u64 = 24 * 7;
const DEFAULT_HEALTH_TIMEOUT_MS: u64 = 3000;
const DEFAULT_PORT: u16 = 3001;

/// Log line format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: Environment,
    pub database_url: String,
    pub redis_url: String,
    /// Public origin short links are served from
    pub base_url: String,
    pub qr_endpoint: Option<String>,
    /// `None` outside production means a per-process random secret
    pub session_secret: Option<[u8; 32]>,
    pub session_ttl: Duration,
    pub health_check_timeout: Duration,
    pub frontend_origins: Vec<String>,
    pub port: u16,
    pub log_format: LogFormat,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let environment = match var("APP_ENV") {
            Some(raw) => raw.parse::<Environment>().context("APP_ENV")?,
            None => Environment::default(),
        };

        let database_url = var("DATABASE_URL").context("DATABASE_URL must be set")?;
        let redis_url = var("REDIS_URL").unwrap_or_else(|| "redis://127.0.0.1:6379".to_string());

        let session_secret = match var("AUTH_TOKEN_SECRET") {
            Some(raw) => Some(decode_secret(&raw)?),
            None if environment.is_production() => {
                bail!("AUTH_TOKEN_SECRET must be set in production")
            }
            None => None,
        };

        let session_ttl_hours = parse_or(var("AUTH_SESSION_TTL_HOURS"), DEFAULT_SESSION_TTL_HOURS)
            .context("AUTH_SESSION_TTL_HOURS")?;
        let health_timeout_ms =
            parse_or(var("HEALTH_CHECK_TIMEOUT_MS"), DEFAULT_HEALTH_TIMEOUT_MS)
                .context("HEALTH_CHECK_TIMEOUT_MS")?;
        let port = parse_or(var("PORT"), DEFAULT_PORT).context("PORT")?;

        let frontend_origins = var("FRONTEND_ORIGINS")
            .unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string())
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(str::to_string)
            .collect();

        let log_format = match var("APP_LOG_FORMAT").as_deref() {
            Some("json") => LogFormat::Json,
            Some(_) => LogFormat::Pretty,
            None if environment.is_production() => LogFormat::Json,
            None => LogFormat::Pretty,
        };

        Ok(Self {
            environment,
            database_url,
            redis_url,
            base_url: var("BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            qr_endpoint: var("QR_ENDPOINT"),
            session_secret,
            session_ttl: Duration::from_secs(session_ttl_hours * 60 * 60),
            health_check_timeout: Duration::from_millis(health_timeout_ms),
            frontend_origins,
            port,
            log_format,
        })
    }
}

impl AppConfig {
    pub fn link_config(&self) -> LinkConfig {
        let defaults = LinkConfig::default();

        LinkConfig {
            base_url: self.base_url.clone(),
            qr_endpoint: self.qr_endpoint.clone().unwrap_or(defaults.qr_endpoint),
            ..defaults
        }
    }

    /// Health reports this binary's package version
    pub fn health_config(&self) -> HealthConfig {
        HealthConfig {
            check_timeout: self.health_check_timeout,
            environment: self.environment,
            version: env!("CARGO_PKG_VERSION").to_string(),
            ..HealthConfig::default()
        }
    }
}

fn parse_or<T>(raw: Option<String>, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match raw {
        Some(raw) => Ok(raw.trim().parse()?),
        None => Ok(default),
    }
}

/// Standard base64, exactly 32 bytes
fn decode_secret(raw: &str) -> anyhow::Result<[u8; 32]> {
    let bytes = platform::crypto::from_base64(raw.trim()).context("AUTH_TOKEN_SECRET")?;
    let len = bytes.len();

    bytes
        .try_into()
        .map_err(|_| anyhow::anyhow!("AUTH_TOKEN_SECRET must decode to 32 bytes, got {len}"))
}
