//! Domain Layer

pub mod entities;
pub mod repository;

pub use entities::ShortenedUrl;
pub use repository::LinkRepository;
