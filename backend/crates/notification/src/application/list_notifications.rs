//! List Notifications Use Case

use std::sync::Arc;

use kernel::id::UserId;

use crate::application::config::NotificationConfig;
use crate::domain::entities::Notification;
use crate::domain::repository::NotificationRepository;
use crate::error::NotificationResult;

pub struct ListNotificationsInput {
    pub unread_only: bool,
    pub limit: Option<i64>,
}

pub struct ListNotificationsOutput {
    pub notifications: Vec<Notification>,
    /// Unread total, independent of the page size
    pub unread_count: i64,
}

pub struct ListNotificationsUseCase<R>
where
    R: NotificationRepository,
{
    repo: Arc<R>,
    config: Arc<NotificationConfig>,
}

impl<R> ListNotificationsUseCase<R>
where
    R: NotificationRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<NotificationConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(
        &self,
        user_id: UserId,
        input: ListNotificationsInput,
    ) -> NotificationResult<ListNotificationsOutput> {
        let limit = self.config.clamp_limit(input.limit);

        let notifications = self
            .repo
            .list_for_user(user_id, input.unread_only, limit)
            .await?;
        let unread_count = self.repo.count_unread(user_id).await?;

        Ok(ListNotificationsOutput {
            notifications,
            unread_count,
        })
    }
}
