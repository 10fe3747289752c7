//! Store implementations.
//!
//! - [`PgLinkRepository`] - PostgreSQL-backed store used in production
//! - [`InMemoryLinkRepository`] - process-local store with the same semantics,
//!   for isolated tests and tooling
//! - [`pool`] - connection pool construction and schema migration

pub mod memory_link_repository;
pub mod pg_link_repository;
pub mod pool;

pub use memory_link_repository::InMemoryLinkRepository;
pub use pg_link_repository::PgLinkRepository;
