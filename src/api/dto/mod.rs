//! Data Transfer Objects for API requests and responses.
//!
//! Response field names are camelCase to match the published JSON contract.

pub mod health;
pub mod pagination;
pub mod stats;
pub mod urls;
