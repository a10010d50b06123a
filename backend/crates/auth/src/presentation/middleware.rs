//! Auth Middleware
//!
//! Middleware for requiring authentication on protected routes.

use axum::body::Body;
use axum::extract::State;
use axum::http::{HeaderValue, Request};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use kernel::auth::AuthenticatedUser;
use platform::client::extract_token;
use std::sync::Arc;

use crate::application::CheckSessionUseCase;
use crate::application::config::AuthConfig;
use crate::domain::repository::AuthSessionRepository;
use crate::error::AuthError;

/// Header set on 401 responses produced by the middleware
pub const AUTH_REQUIRED_HEADER: &str = "x-auth-required";

/// Middleware state
#[derive(Clone)]
pub struct AuthMiddlewareState<R>
where
    R: AuthSessionRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

impl<R> AuthMiddlewareState<R>
where
    R: AuthSessionRepository + Clone + Send + Sync + 'static,
{
    pub fn new(repo: R, config: Arc<AuthConfig>) -> Self {
        Self {
            repo: Arc::new(repo),
            config,
        }
    }
}

/// Middleware that requires a valid auth session
///
/// On success the caller is stored as [`AuthenticatedUser`] in the request
/// extensions. Every failure, repository errors included, ends in 401.
pub async fn require_auth<R>(
    State(state): State<AuthMiddlewareState<R>>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response>
where
    R: AuthSessionRepository + Clone + Send + Sync + 'static,
{
    let token = extract_token(req.headers(), &state.config.session_cookie_name)
        .map(|(token, _)| token)
        .ok_or(AuthError::SessionInvalid);

    let use_case = CheckSessionUseCase::new(state.repo.clone(), state.config.clone());

    let session = match token {
        Ok(token) => use_case.execute(&token).await,
        Err(e) => Err(e),
    };

    match session {
        Ok(session) => {
            req.extensions_mut()
                .insert(AuthenticatedUser::new(session.user_id));
            Ok(next.run(req).await)
        }
        Err(e) => {
            e.log();
            Err(unauthorized())
        }
    }
}

fn unauthorized() -> Response {
    let mut response = AuthError::SessionInvalid.into_app_error().into_response();
    response
        .headers_mut()
        .insert(AUTH_REQUIRED_HEADER, HeaderValue::from_static("true"));
    response
}
