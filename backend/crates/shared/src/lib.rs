//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the "smallest core" of domain vocabulary:
//! - Common error types and result aliases
//! - Typed ID wrappers for users, notifications, links and sessions
//! - The authenticated identity handed from the auth middleware to handlers
//! - Localized user-facing messages shared by every route
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across all domains.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod auth;
pub mod id;
pub mod message;
