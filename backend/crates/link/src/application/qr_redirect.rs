//! QR Redirect Use Case

use std::sync::Arc;

use url::Url;

use crate::application::config::LinkConfig;
use crate::application::resolve_link::ResolveLinkUseCase;
use crate::domain::repository::LinkRepository;
use crate::error::LinkResult;

pub struct QrRedirectUseCase<R>
where
    R: LinkRepository,
{
    repo: Arc<R>,
    config: Arc<LinkConfig>,
}

impl<R> QrRedirectUseCase<R>
where
    R: LinkRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<LinkConfig>) -> Self {
        Self { repo, config }
    }

    /// Location of the QR image for `code`. The image itself is rendered by
    /// the external endpoint.
    pub async fn execute(&self, code: &str) -> LinkResult<Url> {
        let code = code.trim();
        ResolveLinkUseCase::new(self.repo.clone())
            .execute(code)
            .await?;

        let url = self.config.qr_image_url(code)?;

        tracing::info!(code = %code, "QR redirect");

        Ok(url)
    }
}
