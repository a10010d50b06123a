//! Client credential extraction
//!
//! Browsers send the session token as a cookie; API clients may send it as
//! `Authorization: Bearer <token>`. The cookie wins when both are present.

use axum::http::{HeaderMap, header};

use crate::cookie::extract_cookie;

/// Where a credential was found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSource {
    Cookie,
    Bearer,
}

/// Extract the bearer token from the `Authorization` header
///
/// The scheme is matched case-insensitively; blank tokens are ignored.
pub fn extract_bearer_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.trim().split_once(' ')?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    let token = token.trim();
    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}

/// Extract a credential from the named cookie, falling back to the bearer header
pub fn extract_token(headers: &HeaderMap, cookie_name: &str) -> Option<(String, TokenSource)> {
    if let Some(token) = extract_cookie(headers, cookie_name) {
        return Some((token, TokenSource::Cookie));
    }
    extract_bearer_token(headers).map(|token| (token, TokenSource::Bearer))
}
