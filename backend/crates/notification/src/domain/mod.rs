//! Domain Layer
//!
//! Notification entity and repository trait.

pub mod entities;
pub mod repository;

pub use entities::Notification;
pub use repository::NotificationRepository;
