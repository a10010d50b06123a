//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits
//! - `application/` - Use cases, session tokens, configuration
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router, middleware
//!
//! ## Features
//! - Login with email + password, logout
//! - Server-side sessions referenced by a signed `auth-token` cookie
//! - `require_auth` middleware that resolves the caller for protected routers
//!
//! ## Security Model
//! - Passwords hashed with Argon2id
//! - Session tokens are `{session_id}.{HMAC-SHA256}`; forged or tampered
//!   tokens are rejected before any database access
//! - Logout always clears the cookie, even when the session is already gone

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use infra::postgres::PgAuthRepository;
pub use presentation::middleware::{AuthMiddlewareState, require_auth};
pub use presentation::router::auth_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod store {
    pub use crate::infra::postgres::PgAuthRepository as AuthStore;
}

#[cfg(test)]
mod tests;
