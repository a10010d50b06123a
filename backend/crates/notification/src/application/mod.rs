//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod list_notifications;
pub mod mark_all_read;
pub mod mark_read;

// Re-exports
pub use config::NotificationConfig;
pub use list_notifications::{
    ListNotificationsInput, ListNotificationsOutput, ListNotificationsUseCase,
};
pub use mark_all_read::MarkAllReadUseCase;
pub use mark_read::MarkReadUseCase;
