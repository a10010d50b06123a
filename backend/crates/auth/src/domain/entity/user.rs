//! User Entity
//!
//! Login identity. Accounts are provisioned outside this service, so the
//! entity is only ever read.

use chrono::{DateTime, Utc};
use kernel::id::UserId;
use platform::password::{ClearTextPassword, HashedPassword};

use crate::domain::value_object::email::Email;

/// User entity
#[derive(Debug, Clone)]
pub struct User {
    /// Internal UUID identifier
    pub user_id: UserId,
    /// Login email (unique, lowercased)
    pub email: Email,
    /// Argon2id hash
    pub password_hash: HashedPassword,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Check a submitted password against the stored hash
    pub fn verify_password(&self, password: &ClearTextPassword) -> bool {
        self.password_hash.verify(password)
    }
}
