//! Read-only views over the store: the admin listing and aggregate statistics.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::entities::LinkStats;
use crate::domain::pagination::{LinkPage, PageRequest};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::deadline;

/// Service for paginated listing and store-wide statistics.
///
/// Each view is assembled from several independent store reads issued
/// concurrently. The reads are not wrapped in a transaction, so under
/// concurrent writes a page's `total` and `items` (or the stats totals and
/// `top_link`) may come from slightly different snapshots.
pub struct QueryService<R = dyn LinkRepository>
where
    R: LinkRepository + ?Sized,
{
    repository: Arc<R>,
    store_timeout: Duration,
}

impl<R> QueryService<R>
where
    R: LinkRepository + ?Sized,
{
    /// Creates a new query service.
    pub fn new(repository: Arc<R>, store_timeout: Duration) -> Self {
        Self {
            repository,
            store_timeout,
        }
    }

    /// Returns one page of records, newest first.
    ///
    /// Pages past the end yield no items but still report `total` and
    /// `total_pages`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] or [`AppError::Internal`] on store errors.
    pub async fn list(&self, request: PageRequest) -> Result<LinkPage, AppError> {
        let (total, items) = tokio::try_join!(
            deadline::bounded(self.store_timeout, "count", self.repository.count()),
            deadline::bounded(
                self.store_timeout,
                "list",
                self.repository.list(request.offset(), request.limit())
            ),
        )?;

        Ok(LinkPage::new(request, total, items))
    }

    /// Returns total records, total clicks and the most clicked record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] or [`AppError::Internal`] on store errors.
    pub async fn stats(&self) -> Result<LinkStats, AppError> {
        let (total_urls, total_clicks, top_link) = tokio::try_join!(
            deadline::bounded(self.store_timeout, "count", self.repository.count()),
            deadline::bounded(
                self.store_timeout,
                "total_clicks",
                self.repository.total_clicks()
            ),
            deadline::bounded(self.store_timeout, "top_link", self.repository.top_link()),
        )?;

        Ok(LinkStats {
            total_urls,
            total_clicks,
            top_link,
        })
    }

    /// Checks that the store answers within the call budget.
    pub async fn ping(&self) -> Result<(), AppError> {
        deadline::bounded(self.store_timeout, "ping", self.repository.ping()).await
    }
}
