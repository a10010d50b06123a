//! PostgreSQL Repository Implementation

use chrono::{DateTime, Utc};
use kernel::id::ShortenedUrlId;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::ShortenedUrl;
use crate::domain::repository::LinkRepository;
use crate::error::LinkResult;

/// PostgreSQL-backed link repository
#[derive(Clone)]
pub struct PgLinkRepository {
    pool: PgPool,
}

impl PgLinkRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl LinkRepository for PgLinkRepository {
    async fn find_by_code(&self, code: &str) -> LinkResult<Option<ShortenedUrl>> {
        // Each column is unique on its own, so one code can hit two rows.
        // A short_code match wins over a custom_code match.
        let row = sqlx::query_as::<_, ShortenedUrlRow>(
            r#"
            SELECT
                url_id,
                short_code,
                custom_code,
                original_url,
                expires_at,
                click_count,
                created_at
            FROM shortened_urls
            WHERE short_code = $1 OR custom_code = $1
            ORDER BY (short_code = $1) DESC
            LIMIT 1
            "#,
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(ShortenedUrlRow::into_entity))
    }

    async fn record_click(&self, url_id: ShortenedUrlId) -> LinkResult<()> {
        sqlx::query("UPDATE shortened_urls SET click_count = click_count + 1 WHERE url_id = $1")
            .bind(url_id.as_uuid())
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

#[derive(sqlx::FromRow)]
struct ShortenedUrlRow {
    url_id: Uuid,
    short_code: String,
    custom_code: Option<String>,
    original_url: String,
    expires_at: Option<DateTime<Utc>>,
    click_count: i64,
    created_at: DateTime<Utc>,
}

impl ShortenedUrlRow {
    fn into_entity(self) -> ShortenedUrl {
        ShortenedUrl {
            url_id: ShortenedUrlId::from_uuid(self.url_id),
            short_code: self.short_code,
            custom_code: self.custom_code,
            original_url: self.original_url,
            expires_at: self.expires_at,
            click_count: self.click_count,
            created_at: self.created_at,
        }
    }
}
