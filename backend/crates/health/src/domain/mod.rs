//! Domain Layer

pub mod probe;
pub mod report;

pub use probe::HealthProbe;
pub use report::{CheckStatus, HealthReport};
