//! Repository Traits

use kernel::id::{NotificationId, UserId};

use crate::domain::entities::Notification;
use crate::error::NotificationResult;

/// Notification repository trait
///
/// Every method is scoped to `user_id`; rows of other users are invisible.
#[trait_variant::make(NotificationRepository: Send)]
pub trait LocalNotificationRepository {
    /// Newest first, at most `limit` rows
    async fn list_for_user(
        &self,
        user_id: UserId,
        unread_only: bool,
        limit: i64,
    ) -> NotificationResult<Vec<Notification>>;

    async fn count_unread(&self, user_id: UserId) -> NotificationResult<i64>;

    /// Set `is_read` on one owned notification. Returns whether a row matched,
    /// already-read rows included.
    async fn mark_read(
        &self,
        notification_id: NotificationId,
        user_id: UserId,
    ) -> NotificationResult<bool>;

    /// Set `is_read` on every unread notification of the user. Returns the
    /// number of rows that changed.
    async fn mark_all_read(&self, user_id: UserId) -> NotificationResult<u64>;
}
