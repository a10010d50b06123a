//! Infrastructure Layer

pub mod probe;

pub use probe::PgRedisProbe;
