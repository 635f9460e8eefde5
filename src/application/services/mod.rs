//! Business logic services.

pub mod link_service;
pub mod redirect_service;

pub use link_service::LinkService;
pub use redirect_service::RedirectService;
