//! Repository Traits

use kernel::id::ShortenedUrlId;

use crate::domain::entities::ShortenedUrl;
use crate::error::LinkResult;

#[trait_variant::make(LinkRepository: Send)]
pub trait LocalLinkRepository {
    /// Find the record whose `short_code` or `custom_code` equals `code`,
    /// preferring a `short_code` match when both exist
    async fn find_by_code(&self, code: &str) -> LinkResult<Option<ShortenedUrl>>;

    /// Increment the click counter
    async fn record_click(&self, url_id: ShortenedUrlId) -> LinkResult<()>;
}
