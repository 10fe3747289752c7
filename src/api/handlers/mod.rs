//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod admin;
pub mod health;
pub mod stats;
pub mod urls;

pub use admin::list_urls_handler;
pub use health::{health_handler, home_handler, ping_handler};
pub use stats::stats_handler;
pub use urls::{create_url_handler, delete_url_handler, get_url_handler, update_url_handler};
