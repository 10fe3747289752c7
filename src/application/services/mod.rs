//! Business logic services for the application layer.

pub mod link_service;
pub mod query_service;

pub use link_service::{CreatedLink, LinkService};
pub use query_service::QueryService;
