//! Alias creation and deletion service.

use std::iter;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::entities::{LinkRecord, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::alias_generator::AliasGenerator;
use crate::utils::deadline;
use serde_json::json;
use tokio_retry::RetryIf;

/// Insert attempts made before an alias collision is reported.
pub const DEFAULT_MAX_ATTEMPTS: usize = 5;

/// Result of a successful create.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatedLink {
    pub alias: String,
    pub short_url: String,
}

/// Service for creating and deleting aliases.
///
/// Generates a random alias for each new URL and lets the store enforce
/// uniqueness. A collision regenerates the alias and tries again, up to
/// `max_attempts` inserts in total.
pub struct LinkService<R = dyn LinkRepository, G = dyn AliasGenerator>
where
    R: LinkRepository + ?Sized,
    G: AliasGenerator + ?Sized,
{
    repository: Arc<R>,
    generator: Arc<G>,
    base_url: String,
    store_timeout: Duration,
    max_attempts: usize,
}

impl<R, G> LinkService<R, G>
where
    R: LinkRepository + ?Sized,
    G: AliasGenerator + ?Sized,
{
    /// Creates a new link service.
    ///
    /// `base_url` must not end with a slash; short links are `{base_url}/{alias}`.
    pub fn new(
        repository: Arc<R>,
        generator: Arc<G>,
        base_url: impl Into<String>,
        store_timeout: Duration,
    ) -> Self {
        Self {
            repository,
            generator,
            base_url: base_url.into(),
            store_timeout,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Overrides the number of insert attempts. Values below 1 are treated as 1.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// Creates a new alias for `url`.
    ///
    /// The URL is stored verbatim; only emptiness is checked.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `url` is empty or blank. Nothing is
    /// written in that case.
    ///
    /// Returns [`AppError::Conflict`] if every attempt collided with an
    /// existing alias.
    ///
    /// Returns [`AppError::Internal`] if secure randomness is unavailable, and
    /// [`AppError::Unavailable`] / [`AppError::Internal`] on store failures.
    pub async fn create(&self, url: String) -> Result<CreatedLink, AppError> {
        if url.trim().is_empty() {
            return Err(AppError::bad_request(
                "url is required",
                json!({ "field": "url" }),
            ));
        }

        let retries = iter::repeat(Duration::ZERO).take(self.max_attempts - 1);
        let mut attempt = 0;

        let record = RetryIf::spawn(
            retries,
            || self.try_insert(&url),
            |e: &AppError| {
                if !e.is_conflict() {
                    return false;
                }

                attempt += 1;
                metrics::counter!("alias_collisions_total").increment(1);
                if attempt < self.max_attempts {
                    tracing::warn!(
                        attempt,
                        max_attempts = self.max_attempts,
                        "Alias collision, retrying with a new alias"
                    );
                }
                true
            },
        )
        .await
        .map_err(|e| {
            if e.is_conflict() {
                tracing::error!(attempts = self.max_attempts, "Could not allocate a unique alias");
                AppError::conflict(
                    "Could not allocate a unique alias",
                    json!({ "attempts": self.max_attempts }),
                )
            } else {
                e
            }
        })?;

        metrics::counter!("links_created_total").increment(1);
        tracing::info!(alias = %record.alias, "Short link created");

        let short_url = self.short_url(&record.alias);
        Ok(CreatedLink {
            alias: record.alias,
            short_url,
        })
    }

    /// Deletes the record with the given alias.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `alias` is empty.
    /// Returns [`AppError::NotFound`] if no record matched; repeating a delete
    /// therefore reports `NotFound` without side effects.
    pub async fn delete(&self, alias: &str) -> Result<(), AppError> {
        if alias.trim().is_empty() {
            return Err(AppError::bad_request(
                "alias is required",
                json!({ "field": "alias" }),
            ));
        }

        let deleted =
            deadline::bounded(self.store_timeout, "delete", self.repository.delete(alias)).await?;

        if !deleted {
            return Err(AppError::not_found(
                "alias not found",
                json!({ "alias": alias }),
            ));
        }

        tracing::info!(alias, "Short link deleted");
        Ok(())
    }

    /// Builds the public short URL for an alias.
    pub fn short_url(&self, alias: &str) -> String {
        format!("{}/{}", self.base_url, alias)
    }

    async fn try_insert(&self, url: &str) -> Result<LinkRecord, AppError> {
        let alias = self.generator.generate()?;
        let new_link = NewLink {
            alias,
            url: url.to_owned(),
        };

        deadline::bounded(self.store_timeout, "insert", self.repository.insert(new_link)).await
    }
}
