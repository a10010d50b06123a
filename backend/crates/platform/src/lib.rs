//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Runtime environment flag (development / test / production)
//! - Cookie building and parsing
//! - Credential extraction from cookies and bearer headers
//! - Cryptographic utilities (HMAC-SHA256, Base64)
//! - Password verification (Argon2id)

pub mod client;
pub mod config;
pub mod cookie;
pub mod crypto;
pub mod password;
