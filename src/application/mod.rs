//! Application layer services implementing business logic.
//!
//! Services consume the [`crate::domain::repositories::LinkRepository`] trait
//! and provide the operations used by HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Alias creation and deletion
//! - [`services::query_service::QueryService`] - Paginated listing and aggregate statistics

pub mod services;
