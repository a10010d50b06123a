//! Check Session Use Case
//!
//! Verifies a session token and resolves the session behind it.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token;
use crate::domain::entity::auth_session::AuthSession;
use crate::domain::repository::AuthSessionRepository;
use crate::error::{AuthError, AuthResult};

/// Check session use case
pub struct CheckSessionUseCase<S>
where
    S: AuthSessionRepository,
{
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<S> CheckSessionUseCase<S>
where
    S: AuthSessionRepository,
{
    pub fn new(session_repo: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            session_repo,
            config,
        }
    }

    /// Resolve a live session, deleting it if it has expired
    pub async fn execute(&self, session_token: &str) -> AuthResult<AuthSession> {
        let session_id = token::verify(&self.config.session_secret, session_token)?;

        let session = self
            .session_repo
            .find_by_id(session_id)
            .await?
            .ok_or(AuthError::SessionInvalid)?;

        if session.is_expired() {
            if let Err(e) = self.session_repo.delete(session_id).await {
                tracing::warn!(error = %e, session_id = %session_id, "Failed to delete expired session");
            }
            return Err(AuthError::SessionInvalid);
        }

        Ok(session)
    }
}
