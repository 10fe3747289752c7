//! Domain layer: the link record, its read models, and the store contract.
//!
//! # Architecture
//!
//! - [`entities`] - `LinkRecord` and the aggregate views derived from it
//! - [`pagination`] - Page window coercion for the admin listing
//! - [`repositories`] - The [`repositories::LinkRepository`] store trait
//!
//! The domain layer has no dependency on PostgreSQL or HTTP. Implementations of
//! the store live in [`crate::infrastructure::persistence`].

pub mod entities;
pub mod pagination;
pub mod repositories;
