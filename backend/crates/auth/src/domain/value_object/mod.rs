//! Value Object Module

pub mod email;

pub use email::Email;
