//! Resolve Link Use Case
//!
//! Shared lookup behind both redirects.

use std::sync::Arc;

use crate::domain::entities::ShortenedUrl;
use crate::domain::repository::LinkRepository;
use crate::error::{LinkError, LinkResult};

pub struct ResolveLinkUseCase<R>
where
    R: LinkRepository,
{
    repo: Arc<R>,
}

impl<R> ResolveLinkUseCase<R>
where
    R: LinkRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Blank code is 400, unknown 404, expired 410.
    pub async fn execute(&self, code: &str) -> LinkResult<ShortenedUrl> {
        let code = code.trim();
        if code.is_empty() {
            return Err(LinkError::MissingCode);
        }

        let link = self
            .repo
            .find_by_code(code)
            .await?
            .ok_or_else(|| LinkError::NotFound(code.to_string()))?;

        if link.is_expired() {
            return Err(LinkError::Expired(code.to_string()));
        }

        Ok(link)
    }
}
