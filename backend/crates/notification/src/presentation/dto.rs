//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::Notification;

pub const MARK_READ_SUCCESS: &str = "알림을 읽음 처리했습니다.";
pub const MARK_ALL_READ_SUCCESS: &str = "모든 알림을 읽음 처리했습니다.";

// ============================================================================
// List
// ============================================================================

/// `GET /api/notifications?unreadOnly=true&limit=20`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    #[serde(default)]
    pub unread_only: bool,
    pub limit: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationDto {
    pub id: String,
    pub title: String,
    pub message: String,
    pub link: Option<String>,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Notification> for NotificationDto {
    fn from(n: Notification) -> Self {
        Self {
            id: n.notification_id.to_string(),
            title: n.title,
            message: n.message,
            link: n.link,
            is_read: n.is_read,
            created_at: n.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse {
    pub notifications: Vec<NotificationDto>,
    pub unread_count: i64,
}

// ============================================================================
// Mark read
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkReadResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkAllReadResponse {
    pub success: bool,
    pub message: String,
    pub count: u64,
}
