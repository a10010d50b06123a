//! Notification Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Notification entity, repository trait
//! - `application/` - Use cases (list, mark one read, mark all read)
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! Every route expects the caller to be resolved by the auth middleware and
//! only ever touches the caller's own rows. A notification owned by someone
//! else is indistinguishable from one that does not exist.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::NotificationConfig;
pub use error::{NotificationError, NotificationResult};
pub use infra::postgres::PgNotificationRepository;
pub use presentation::router::notification_router;

pub mod models {
    pub use crate::domain::entities::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}
