//! HTTP Handlers
//!
//! Both routes answer `302 Found` with a `Location` header.

use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use crate::application::config::LinkConfig;
use crate::application::{FollowLinkUseCase, QrRedirectUseCase};
use crate::domain::repository::LinkRepository;
use crate::error::{LinkError, LinkResult};

/// Shared state for link handlers
#[derive(Clone)]
pub struct LinkAppState<R>
where
    R: LinkRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<LinkConfig>,
}

/// GET /api/qr/{code}
pub async fn qr_redirect<R>(
    State(state): State<LinkAppState<R>>,
    code: Result<Path<String>, PathRejection>,
) -> LinkResult<Response>
where
    R: LinkRepository + Clone + Send + Sync + 'static,
{
    let code = path_code(code)?;

    let url = QrRedirectUseCase::new(state.repo.clone(), state.config.clone())
        .execute(&code)
        .await?;

    Ok(found(url.as_str()))
}

/// GET /{code}
pub async fn follow<R>(
    State(state): State<LinkAppState<R>>,
    code: Result<Path<String>, PathRejection>,
) -> LinkResult<Response>
where
    R: LinkRepository + Clone + Send + Sync + 'static,
{
    let code = path_code(code)?;

    let destination = FollowLinkUseCase::new(state.repo.clone())
        .execute(&code)
        .await?;

    Ok(found(&destination))
}

fn path_code(code: Result<Path<String>, PathRejection>) -> LinkResult<String> {
    code.map(|Path(code)| code).map_err(|e| {
        tracing::debug!(error = %e, "Rejected short code");
        LinkError::MissingCode
    })
}

// axum's Redirect only offers 303/307/308
fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.to_string())]).into_response()
}
