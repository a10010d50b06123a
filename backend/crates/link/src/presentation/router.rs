//! Link Router
//!
//! Paths are absolute; merge this router at the root.

use axum::{Router, routing::get};
use std::sync::Arc;

use crate::application::config::LinkConfig;
use crate::domain::repository::LinkRepository;
use crate::infra::postgres::PgLinkRepository;
use crate::presentation::handlers::{self, LinkAppState};

/// Create the Link router with PostgreSQL repository
pub fn link_router(repo: PgLinkRepository, config: LinkConfig) -> Router {
    link_router_generic(repo, config)
}

/// Create a generic Link router for any repository implementation
pub fn link_router_generic<R>(repo: R, config: LinkConfig) -> Router
where
    R: LinkRepository + Clone + Send + Sync + 'static,
{
    let state = LinkAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    Router::new()
        .route("/api/qr/{code}", get(handlers::qr_redirect::<R>))
        .route("/{code}", get(handlers::follow::<R>))
        .with_state(state)
}
