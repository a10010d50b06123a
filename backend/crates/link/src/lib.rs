//! Link Backend Module
//!
//! Resolves short codes to shortened-URL records and answers with redirects:
//! - `GET /api/qr/{code}` redirects to an external QR image for the short link
//! - `GET /{code}` redirects to the original URL and counts the click
//!
//! A code matches either the generated `short_code` or the user-chosen
//! `custom_code`. Expired records stay in the table and answer 410.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::LinkConfig;
pub use error::{LinkError, LinkResult};
pub use infra::postgres::PgLinkRepository;
pub use presentation::router::link_router;

pub mod models {
    pub use crate::domain::entities::*;
}

#[cfg(test)]
mod tests;
