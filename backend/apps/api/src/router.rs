//! Router Composition
//!
//! Mount points and the auth layer live here so the full route table can be
//! exercised without a database.

use auth::domain::AuthSessionRepository;
use auth::{AuthMiddlewareState, require_auth};
use axum::{Router, middleware};

/// Per-domain routers, each already carrying its own state
pub struct Routes {
    pub auth: Router,
    pub notifications: Router,
    pub health: Router,
    pub links: Router,
}

/// Mount every domain router; notifications sit behind `require_auth`.
///
/// Links are merged last at the root, so `/{code}` only sees single segments
/// that no `/api/...` route claims.
pub fn compose<R>(routes: Routes, auth_state: AuthMiddlewareState<R>) -> Router
where
    R: AuthSessionRepository + Clone + Send + Sync + 'static,
{
    Router::new()
        .nest("/api/auth", routes.auth)
        .nest(
            "/api/notifications",
            routes
                .notifications
                .route_layer(middleware::from_fn_with_state(auth_state, require_auth::<R>)),
        )
        .nest("/api/health", routes.health)
        .merge(routes.links)
}
