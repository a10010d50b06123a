//! Follow Link Use Case

use std::sync::Arc;

use crate::application::resolve_link::ResolveLinkUseCase;
use crate::domain::repository::LinkRepository;
use crate::error::LinkResult;

pub struct FollowLinkUseCase<R>
where
    R: LinkRepository,
{
    repo: Arc<R>,
}

impl<R> FollowLinkUseCase<R>
where
    R: LinkRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Returns the destination URL. A failed click count does not block the
    /// redirect.
    pub async fn execute(&self, code: &str) -> LinkResult<String> {
        let link = ResolveLinkUseCase::new(self.repo.clone())
            .execute(code)
            .await?;

        if let Err(e) = self.repo.record_click(link.url_id).await {
            tracing::warn!(error = %e, url_id = %link.url_id, "Failed to record click");
        }

        tracing::info!(code = %code.trim(), "Short link followed");

        Ok(link.original_url)
    }
}
