//! Page window coercion for the admin listing.
//!
//! Listing input is permissive: a missing, zero or negative `page` means the
//! first page, a missing or non-positive `limit` means [`DEFAULT_LIMIT`], and
//! any limit above [`MAX_LIMIT`] is clamped. No input is ever rejected.

use super::entities::LinkRecord;

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 20;
pub const MAX_LIMIT: i64 = 100;

/// A coerced page request. Always `page >= 1` and `1 <= limit <= MAX_LIMIT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: i64,
    limit: i64,
}

impl PageRequest {
    pub fn new(page: Option<i64>, limit: Option<i64>) -> Self {
        let page = page.filter(|p| *p > 0).unwrap_or(DEFAULT_PAGE);
        let limit = limit
            .filter(|l| *l > 0)
            .unwrap_or(DEFAULT_LIMIT)
            .min(MAX_LIMIT);

        Self { page, limit }
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }

    /// Row offset of the first item on this page.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// One page of the listing, newest records first.
///
/// `total` and `items` come from separate store reads and may reflect slightly
/// different snapshots under concurrent writes.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkPage {
    pub total: i64,
    pub page: i64,
    pub limit: i64,
    pub total_pages: i64,
    pub items: Vec<LinkRecord>,
}

impl LinkPage {
    pub fn new(request: PageRequest, total: i64, items: Vec<LinkRecord>) -> Self {
        Self {
            total,
            page: request.page(),
            limit: request.limit(),
            total_pages: total_pages(total, request.limit()),
            items,
        }
    }
}

/// `ceil(total / limit)`, zero for an empty store.
fn total_pages(total: i64, limit: i64) -> i64 {
    if total <= 0 {
        return 0;
    }
    (total + limit - 1) / limit
}
