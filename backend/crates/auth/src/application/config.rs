//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::time::Duration;

use platform::config::Environment;
use platform::cookie::CookieConfig;

/// Re-export SameSite from platform
pub use platform::cookie::SameSite;

/// Name of the session cookie read by the middleware and cleared by logout
pub const SESSION_COOKIE_NAME: &str = "auth-token";

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Session cookie name
    pub session_cookie_name: String,
    /// Session secret key for HMAC signing (32 bytes)
    pub session_secret: [u8; 32],
    /// Session lifetime (1 week by default)
    pub session_ttl: Duration,
    /// Whether to require Secure cookie
    pub cookie_secure: bool,
    /// SameSite policy
    pub cookie_same_site: SameSite,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            session_cookie_name: SESSION_COOKIE_NAME.to_string(),
            session_secret: [0u8; 32],
            session_ttl: Duration::from_secs(7 * 24 * 3600), // 1 week
            cookie_secure: true,
            cookie_same_site: SameSite::Lax,
        }
    }
}

impl AuthConfig {
    /// Create config with a random session secret (for development)
    pub fn with_random_secret() -> Self {
        Self {
            session_secret: platform::crypto::random_key(),
            ..Default::default()
        }
    }

    /// Create config for development (insecure cookie)
    pub fn development() -> Self {
        Self {
            cookie_secure: false,
            ..Self::with_random_secret()
        }
    }

    /// `Secure` is only set in production, where the site is served over TLS
    pub fn for_environment(
        env: Environment,
        session_secret: [u8; 32],
        session_ttl: Duration,
    ) -> Self {
        Self {
            session_secret,
            session_ttl,
            cookie_secure: env.is_production(),
            ..Default::default()
        }
    }

    /// Get session TTL as a chrono duration
    ///
    /// Out-of-range values fall back to one week.
    pub fn session_ttl_chrono(&self) -> chrono::Duration {
        chrono::Duration::from_std(self.session_ttl).unwrap_or_else(|_| chrono::Duration::weeks(1))
    }

    /// Cookie attributes shared by login and logout
    pub fn cookie(&self) -> CookieConfig {
        CookieConfig {
            name: self.session_cookie_name.clone(),
            secure: self.cookie_secure,
            http_only: true,
            same_site: self.cookie_same_site,
            path: "/".to_string(),
        }
    }
}
