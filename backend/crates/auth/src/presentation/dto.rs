//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

/// Login success message
pub const LOGIN_SUCCESS: &str = "로그인되었습니다.";

/// Logout message, returned whether or not a session existed
pub const LOGOUT_SUCCESS: &str = "로그아웃되었습니다.";

// ============================================================================
// Login
// ============================================================================

/// Login request
///
/// Missing fields deserialize as empty so they surface as a 400 from the
/// use case rather than a body rejection.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Login response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    pub user_id: String,
}

// ============================================================================
// Logout
// ============================================================================

/// Logout response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoutResponse {
    pub success: bool,
    pub message: String,
}

impl LogoutResponse {
    pub fn ok() -> Self {
        Self {
            success: true,
            message: LOGOUT_SUCCESS.to_string(),
        }
    }
}
