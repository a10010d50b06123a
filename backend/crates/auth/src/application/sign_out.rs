//! Sign Out Use Case
//!
//! Invalidates a user session.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token;
use crate::domain::repository::AuthSessionRepository;
use crate::error::AuthResult;

/// Sign out use case
pub struct SignOutUseCase<S>
where
    S: AuthSessionRepository,
{
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<S> SignOutUseCase<S>
where
    S: AuthSessionRepository,
{
    pub fn new(session_repo: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            session_repo,
            config,
        }
    }

    /// Delete the session behind `session_token`
    ///
    /// Returns whether a session row was removed. Forged tokens fail with
    /// `SessionInvalid` without touching the database.
    pub async fn execute(&self, session_token: &str) -> AuthResult<bool> {
        let session_id = token::verify(&self.config.session_secret, session_token)?;
        let deleted = self.session_repo.delete(session_id).await?;

        tracing::info!(session_id = %session_id, deleted, "User signed out");
        Ok(deleted)
    }
}
