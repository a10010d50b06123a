//! Cookie Management Infrastructure
//!
//! Builds `Set-Cookie` header values and reads cookies from requests.

use axum::http::{HeaderMap, header};

/// `Expires` value used to clear a cookie.
pub const EPOCH_EXPIRES: &str = "Thu, 01 Jan 1970 00:00:00 GMT";

/// SameSite policy for cookies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SameSite {
    Strict,
    #[default]
    Lax,
    None,
}

impl SameSite {
    pub fn as_str(&self) -> &'static str {
        match self {
            SameSite::Strict => "Strict",
            SameSite::Lax => "Lax",
            SameSite::None => "None",
        }
    }
}

/// Cookie attributes shared by the set and clear variants
#[derive(Debug, Clone)]
pub struct CookieConfig {
    pub name: String,
    pub secure: bool,
    pub http_only: bool,
    pub same_site: SameSite,
    pub path: String,
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self {
            name: "session".to_string(),
            secure: true,
            http_only: true,
            same_site: SameSite::Lax,
            path: "/".to_string(),
        }
    }
}

impl CookieConfig {
    /// Build a `Set-Cookie` value that stores `value` for `max_age_secs`.
    pub fn build_set_cookie(&self, value: &str, max_age_secs: u64) -> String {
        self.build(value, &format!("Max-Age={}", max_age_secs))
    }

    /// Build a `Set-Cookie` value that makes the browser drop the cookie.
    ///
    /// Empty value, `Max-Age=0` and an epoch `Expires`, with the same
    /// attributes as the set variant so that browsers match it.
    pub fn build_delete_cookie(&self) -> String {
        self.build("", &format!("Max-Age=0; Expires={}", EPOCH_EXPIRES))
    }

    fn build(&self, value: &str, lifetime: &str) -> String {
        let mut parts = vec![format!("{}={}", self.name, value)];

        if self.http_only {
            parts.push("HttpOnly".to_string());
        }
        parts.push(format!("Path={}", self.path));
        parts.push(lifetime.to_string());
        parts.push(format!("SameSite={}", self.same_site.as_str()));
        if self.secure {
            parts.push("Secure".to_string());
        }

        parts.join("; ")
    }
}

/// Extract a cookie value from headers
///
/// Every `Cookie` header is searched; empty values count as absent.
pub fn extract_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .find_map(|cookie| {
            let (key, value) = cookie.trim().split_once('=')?;

            if key == name && !value.is_empty() {
                Some(value.to_string())
            } else {
                None
            }
        })
}
