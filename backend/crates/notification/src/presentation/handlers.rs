//! HTTP Handlers
//!
//! Identity comes from the auth middleware via [`AuthenticatedUser`].

use axum::Json;
use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use kernel::auth::AuthenticatedUser;
use std::sync::Arc;

use crate::application::config::NotificationConfig;
use crate::application::{
    ListNotificationsInput, ListNotificationsUseCase, MarkAllReadUseCase, MarkReadUseCase,
};
use crate::domain::repository::NotificationRepository;
use crate::error::{NotificationError, NotificationResult};
use crate::presentation::dto::{
    ListQuery, ListResponse, MARK_ALL_READ_SUCCESS, MARK_READ_SUCCESS, MarkAllReadResponse,
    MarkReadResponse,
};

/// Shared state for notification handlers
#[derive(Clone)]
pub struct NotificationAppState<R>
where
    R: NotificationRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<NotificationConfig>,
}

/// GET /api/notifications
pub async fn list<R>(
    State(state): State<NotificationAppState<R>>,
    user: AuthenticatedUser,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> NotificationResult<Json<ListResponse>>
where
    R: NotificationRepository + Clone + Send + Sync + 'static,
{
    let Query(query) = query.map_err(|e| NotificationError::InvalidQuery(e.body_text()))?;

    let use_case = ListNotificationsUseCase::new(state.repo.clone(), state.config.clone());
    let output = use_case
        .execute(
            user.user_id,
            ListNotificationsInput {
                unread_only: query.unread_only,
                limit: query.limit,
            },
        )
        .await?;

    Ok(Json(ListResponse {
        notifications: output.notifications.into_iter().map(Into::into).collect(),
        unread_count: output.unread_count,
    }))
}

/// PATCH /api/notifications/{id}/read
pub async fn mark_read<R>(
    State(state): State<NotificationAppState<R>>,
    user: AuthenticatedUser,
    id: Result<Path<String>, PathRejection>,
) -> NotificationResult<Json<MarkReadResponse>>
where
    R: NotificationRepository + Clone + Send + Sync + 'static,
{
    // An undecodable segment carries no usable id
    let Path(id) = id.map_err(|e| {
        tracing::debug!(error = %e, "Rejected notification id");
        NotificationError::MissingId
    })?;

    MarkReadUseCase::new(state.repo.clone())
        .execute(user.user_id, &id)
        .await?;

    Ok(Json(MarkReadResponse {
        success: true,
        message: MARK_READ_SUCCESS.to_string(),
    }))
}

/// PATCH /api/notifications/read-all
pub async fn mark_all_read<R>(
    State(state): State<NotificationAppState<R>>,
    user: AuthenticatedUser,
) -> NotificationResult<Json<MarkAllReadResponse>>
where
    R: NotificationRepository + Clone + Send + Sync + 'static,
{
    let count = MarkAllReadUseCase::new(state.repo.clone())
        .execute(user.user_id)
        .await?;

    Ok(Json(MarkAllReadResponse {
        success: true,
        message: MARK_ALL_READ_SUCCESS.to_string(),
        count,
    }))
}
