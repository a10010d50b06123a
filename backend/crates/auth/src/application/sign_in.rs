//! Sign In Use Case
//!
//! Authenticates a user and creates a session.

use std::sync::Arc;

use kernel::id::UserId;
use platform::password::ClearTextPassword;

use crate::application::config::AuthConfig;
use crate::application::token;
use crate::domain::entity::auth_session::AuthSession;
use crate::domain::repository::{AuthSessionRepository, UserRepository};
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

/// Sign in input
pub struct SignInInput {
    pub email: String,
    pub password: String,
}

/// Sign in output
pub struct SignInOutput {
    /// Session token for cookie
    pub session_token: String,
    pub user_id: UserId,
}

/// Sign in use case
pub struct SignInUseCase<U, S>
where
    U: UserRepository,
    S: AuthSessionRepository,
{
    user_repo: Arc<U>,
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<U, S> SignInUseCase<U, S>
where
    U: UserRepository,
    S: AuthSessionRepository,
{
    pub fn new(user_repo: Arc<U>, session_repo: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            user_repo,
            session_repo,
            config,
        }
    }

    pub async fn execute(&self, input: SignInInput) -> AuthResult<SignInOutput> {
        if input.email.trim().is_empty() || input.password.trim().is_empty() {
            return Err(AuthError::MissingCredentials);
        }

        // Malformed email and unknown account look the same to the caller
        let email = Email::new(input.email).map_err(|_| AuthError::InvalidCredentials)?;

        let user = self
            .user_repo
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let password =
            ClearTextPassword::new(input.password).map_err(|_| AuthError::InvalidCredentials)?;

        if !user.verify_password(&password) {
            return Err(AuthError::InvalidCredentials);
        }

        let session = AuthSession::new(user.user_id, self.config.session_ttl_chrono());
        self.session_repo.create(&session).await?;

        let session_token = token::issue(&self.config.session_secret, session.session_id);

        tracing::info!(
            user_id = %user.user_id,
            session_id = %session.session_id,
            "User signed in"
        );

        Ok(SignInOutput {
            session_token,
            user_id: user.user_id,
        })
    }
}
