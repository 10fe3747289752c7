//! Repository trait for the alias store.

use crate::domain::entities::{LinkRecord, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// The store of alias records and the single source of truth for them.
///
/// Implementations must be safe to share between many in-flight requests.
/// Reads are not required to be consistent with each other: a `count` and a
/// `list` issued back to back may observe different snapshots.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryLinkRepository`] - isolated in-process store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a new record with zero clicks and the current timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the alias is already taken. The
    /// existing record is never overwritten.
    ///
    /// Returns [`AppError::Unavailable`] or [`AppError::Internal`] on store errors.
    async fn insert(&self, new_link: NewLink) -> Result<LinkRecord, AppError>;

    /// Removes the record with the given alias.
    ///
    /// Returns `Ok(true)` if a row was removed, `Ok(false)` if none matched.
    async fn delete(&self, alias: &str) -> Result<bool, AppError>;

    /// Counts all records.
    async fn count(&self) -> Result<i64, AppError>;

    /// Lists records newest first.
    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<LinkRecord>, AppError>;

    /// Sums clicks over all records. Zero for an empty store.
    async fn total_clicks(&self) -> Result<i64, AppError>;

    /// Returns the record with the most clicks, or `None` for an empty store.
    ///
    /// Ties are broken by insertion order (oldest wins).
    async fn top_link(&self) -> Result<Option<LinkRecord>, AppError>;

    /// Round-trips to the store without touching any record.
    async fn ping(&self) -> Result<(), AppError>;
}
