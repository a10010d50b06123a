//! Session Tokens
//!
//! A token is `{session_id}.{signature}` where the signature is the unpadded
//! base64url HMAC-SHA256 of the session id string under the configured secret.
//! The signature is checked before the id is parsed or looked up.

use kernel::id::SessionId;
use platform::crypto::{from_base64url, hmac_sha256, to_base64url, verify_hmac_sha256};

use crate::error::{AuthError, AuthResult};

/// Generate signed session token
pub fn issue(secret: &[u8; 32], session_id: SessionId) -> String {
    let session_id = session_id.to_string();
    let signature = hmac_sha256(secret, session_id.as_bytes());

    format!("{}.{}", session_id, to_base64url(&signature))
}

/// Verify the signature and return the session id it covers
pub fn verify(secret: &[u8; 32], token: &str) -> AuthResult<SessionId> {
    let (session_id_str, signature_b64) = token
        .trim()
        .split_once('.')
        .ok_or(AuthError::SessionInvalid)?;

    let signature = from_base64url(signature_b64).map_err(|_| AuthError::SessionInvalid)?;

    if !verify_hmac_sha256(secret, session_id_str.as_bytes(), &signature) {
        return Err(AuthError::SessionInvalid);
    }

    session_id_str
        .parse()
        .map_err(|_| AuthError::SessionInvalid)
}
