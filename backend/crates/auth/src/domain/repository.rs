//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::SessionId;

use crate::domain::entity::{auth_session::AuthSession, user::User};
use crate::domain::value_object::email::Email;
use crate::error::AuthResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Find user by login email
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>>;
}

/// Auth session repository trait
#[trait_variant::make(AuthSessionRepository: Send)]
pub trait LocalAuthSessionRepository {
    /// Create a new session
    async fn create(&self, session: &AuthSession) -> AuthResult<()>;

    /// Find session by ID
    async fn find_by_id(&self, session_id: SessionId) -> AuthResult<Option<AuthSession>>;

    /// Delete a session, returning whether a row existed
    async fn delete(&self, session_id: SessionId) -> AuthResult<bool>;

    /// Clean up expired sessions
    async fn cleanup_expired(&self) -> AuthResult<u64>;
}
