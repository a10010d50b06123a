//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use platform::client::extract_token;

use crate::application::config::AuthConfig;
use crate::application::{SignInInput, SignInUseCase, SignOutUseCase};
use crate::domain::repository::{AuthSessionRepository, UserRepository};
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{LOGIN_SUCCESS, LoginRequest, LoginResponse, LogoutResponse};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + AuthSessionRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

// ============================================================================
// Login
// ============================================================================

/// POST /api/auth/login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> AuthResult<Response>
where
    R: UserRepository + AuthSessionRepository + Clone + Send + Sync + 'static,
{
    let Json(req) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Rejected login body");
        AuthError::MissingCredentials
    })?;

    let use_case = SignInUseCase::new(state.repo.clone(), state.repo.clone(), state.config.clone());

    let output = use_case
        .execute(SignInInput {
            email: req.email,
            password: req.password,
        })
        .await?;

    let cookie = state
        .config
        .cookie()
        .build_set_cookie(&output.session_token, state.config.session_ttl.as_secs());

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(LoginResponse {
            success: true,
            message: LOGIN_SUCCESS.to_string(),
            user_id: output.user_id.to_string(),
        }),
    )
        .into_response())
}

// ============================================================================
// Logout
// ============================================================================

/// POST /api/auth/logout
///
/// Always succeeds and clears the cookie. Session deletion is best effort.
pub async fn logout<R>(State(state): State<AuthAppState<R>>, headers: HeaderMap) -> Response
where
    R: UserRepository + AuthSessionRepository + Clone + Send + Sync + 'static,
{
    if let Some((token, _)) = extract_token(&headers, &state.config.session_cookie_name) {
        let use_case = SignOutUseCase::new(state.repo.clone(), state.config.clone());

        match use_case.execute(&token).await {
            Ok(_) => {}
            Err(AuthError::SessionInvalid) => {
                tracing::debug!("Logout with invalid token");
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to delete session on logout");
            }
        }
    }

    let cookie = state.config.cookie().build_delete_cookie();

    (
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(LogoutResponse::ok()),
    )
        .into_response()
}
