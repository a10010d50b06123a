//! Presentation Layer

pub mod handlers;
pub mod router;

pub use handlers::LinkAppState;
pub use router::{link_router, link_router_generic};
