//! Application Layer

pub mod config;
pub mod follow_link;
pub mod qr_redirect;
pub mod resolve_link;

pub use config::LinkConfig;
pub use follow_link::FollowLinkUseCase;
pub use qr_redirect::QrRedirectUseCase;
pub use resolve_link::ResolveLinkUseCase;
