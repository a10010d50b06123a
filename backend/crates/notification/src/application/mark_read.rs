//! Mark Read Use Case
//!
//! Marks one of the caller's notifications as read.

use std::sync::Arc;

use kernel::id::{NotificationId, UserId};

use crate::domain::repository::NotificationRepository;
use crate::error::{NotificationError, NotificationResult};

pub struct MarkReadUseCase<R>
where
    R: NotificationRepository,
{
    repo: Arc<R>,
}

impl<R> MarkReadUseCase<R>
where
    R: NotificationRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// `raw_id` is the path segment as received.
    ///
    /// Blank ids are a bad request. Ids that are not UUIDs cannot match any
    /// row and are reported as not found, same as a missing or foreign row.
    pub async fn execute(&self, user_id: UserId, raw_id: &str) -> NotificationResult<()> {
        if raw_id.trim().is_empty() {
            return Err(NotificationError::MissingId);
        }

        let notification_id: NotificationId =
            raw_id.parse().map_err(|_| NotificationError::NotFound)?;

        if !self.repo.mark_read(notification_id, user_id).await? {
            return Err(NotificationError::NotFound);
        }

        tracing::info!(
            user_id = %user_id,
            notification_id = %notification_id,
            "Notification marked as read"
        );

        Ok(())
    }
}
