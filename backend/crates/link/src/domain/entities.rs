//! Domain Entities

use chrono::{DateTime, Utc};
use kernel::id::ShortenedUrlId;

/// A short code and the destination it stands for
#[derive(Debug, Clone)]
pub struct ShortenedUrl {
    pub url_id: ShortenedUrlId,
    /// Generated code, always present
    pub short_code: String,
    /// User-chosen alias resolving through the same path
    pub custom_code: Option<String>,
    pub original_url: String,
    /// `None` never expires
    pub expires_at: Option<DateTime<Utc>>,
    pub click_count: i64,
    pub created_at: DateTime<Utc>,
}

impl ShortenedUrl {
    /// Expired once `expires_at` is strictly in the past
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|expires_at| expires_at < now)
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}
