//! Domain Entities

use chrono::{DateTime, Utc};
use kernel::id::{NotificationId, UserId};

/// A message addressed to one user
///
/// Rows are written by other services. This crate only flips `is_read`
/// from false to true.
#[derive(Debug, Clone)]
pub struct Notification {
    pub notification_id: NotificationId,
    pub user_id: UserId,
    pub title: String,
    pub message: String,
    /// In-app path the notification points at
    pub link: Option<String>,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}
