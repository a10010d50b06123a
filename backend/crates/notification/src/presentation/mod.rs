//! Presentation Layer
//!
//! HTTP handlers, DTOs, router.

pub mod dto;
pub mod handlers;
pub mod router;

pub use handlers::NotificationAppState;
pub use router::{notification_router, notification_router_generic};
