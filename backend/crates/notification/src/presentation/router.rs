//! Notification Router
//!
//! Routes are relative; the caller nests them under `/api/notifications`
//! and wraps them with the auth middleware.

use axum::{
    Router,
    routing::{get, patch},
};
use std::sync::Arc;

use crate::application::config::NotificationConfig;
use crate::domain::repository::NotificationRepository;
use crate::infra::postgres::PgNotificationRepository;
use crate::presentation::handlers::{self, NotificationAppState};

/// Create the Notification router with PostgreSQL repository
pub fn notification_router(repo: PgNotificationRepository, config: NotificationConfig) -> Router {
    notification_router_generic(repo, config)
}

/// Create a generic Notification router for any repository implementation
pub fn notification_router_generic<R>(repo: R, config: NotificationConfig) -> Router
where
    R: NotificationRepository + Clone + Send + Sync + 'static,
{
    let state = NotificationAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    Router::new()
        .route("/", get(handlers::list::<R>))
        .route("/read-all", patch(handlers::mark_all_read::<R>))
        .route("/{id}/read", patch(handlers::mark_read::<R>))
        .with_state(state)
}
