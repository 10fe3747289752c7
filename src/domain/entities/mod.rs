//! Core domain entities.
//!
//! - [`LinkRecord`] - A persisted alias → URL mapping with its click counter
//! - [`NewLink`] - Input for inserting a record
//! - [`LinkStats`] - Aggregate statistics over all records

pub mod link;
pub mod stats;

pub use link::{LinkRecord, NewLink};
pub use stats::LinkStats;
