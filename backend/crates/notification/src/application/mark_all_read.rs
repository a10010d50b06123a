//! Mark All Read Use Case

use std::sync::Arc;

use kernel::id::UserId;

use crate::domain::repository::NotificationRepository;
use crate::error::NotificationResult;

pub struct MarkAllReadUseCase<R>
where
    R: NotificationRepository,
{
    repo: Arc<R>,
}

impl<R> MarkAllReadUseCase<R>
where
    R: NotificationRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Returns how many notifications changed state; zero on repeat calls.
    pub async fn execute(&self, user_id: UserId) -> NotificationResult<u64> {
        let count = self.repo.mark_all_read(user_id).await?;

        tracing::info!(user_id = %user_id, count, "All notifications marked as read");

        Ok(count)
    }
}
