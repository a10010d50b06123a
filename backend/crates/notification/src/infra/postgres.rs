//! PostgreSQL Repository Implementation

use chrono::{DateTime, Utc};
use kernel::id::{NotificationId, UserId};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::Notification;
use crate::domain::repository::NotificationRepository;
use crate::error::NotificationResult;

/// PostgreSQL-backed notification repository
#[derive(Clone)]
pub struct PgNotificationRepository {
    pool: PgPool,
}

impl PgNotificationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl NotificationRepository for PgNotificationRepository {
    async fn list_for_user(
        &self,
        user_id: UserId,
        unread_only: bool,
        limit: i64,
    ) -> NotificationResult<Vec<Notification>> {
        let rows = sqlx::query_as::<_, NotificationRow>(
            r#"
            SELECT
                notification_id,
                user_id,
                title,
                message,
                link,
                is_read,
                created_at
            FROM notifications
            WHERE user_id = $1
              AND ($2 = FALSE OR is_read = FALSE)
            ORDER BY created_at DESC
            LIMIT $3
            "#,
        )
        .bind(user_id.as_uuid())
        .bind(unread_only)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(NotificationRow::into_notification).collect())
    }

    async fn count_unread(&self, user_id: UserId) -> NotificationResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM notifications WHERE user_id = $1 AND is_read = FALSE",
        )
        .bind(user_id.as_uuid())
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }

    async fn mark_read(
        &self,
        notification_id: NotificationId,
        user_id: UserId,
    ) -> NotificationResult<bool> {
        // Ownership is part of the predicate, so a foreign id matches nothing
        let result = sqlx::query(
            r#"
            UPDATE notifications
            SET is_read = TRUE
            WHERE notification_id = $1
              AND user_id = $2
            "#,
        )
        .bind(notification_id.as_uuid())
        .bind(user_id.as_uuid())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn mark_all_read(&self, user_id: UserId) -> NotificationResult<u64> {
        let result = sqlx::query(
            r#"
            UPDATE notifications
            SET is_read = TRUE
            WHERE user_id = $1
              AND is_read = FALSE
            "#,
        )
        .bind(user_id.as_uuid())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }
}

#[derive(sqlx::FromRow)]
struct NotificationRow {
    notification_id: Uuid,
    user_id: Uuid,
    title: String,
    message: String,
    link: Option<String>,
    is_read: bool,
    created_at: DateTime<Utc>,
}

impl NotificationRow {
    fn into_notification(self) -> Notification {
        Notification {
            notification_id: NotificationId::from_uuid(self.notification_id),
            user_id: UserId::from_uuid(self.user_id),
            title: self.title,
            message: self.message,
            link: self.link,
            is_read: self.is_read,
            created_at: self.created_at,
        }
    }
}
