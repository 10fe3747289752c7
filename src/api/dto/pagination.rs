//! Listing query parameters and the paginated response.

use serde::Serialize;

use crate::domain::entities::LinkRecord;
use crate::domain::pagination::{LinkPage, PageRequest};

/// Query parameters of the admin listing.
///
/// Parsing is lenient: only the first occurrence of a key counts, and a value
/// that is not an integer is treated as absent instead of rejecting the
/// request. Range coercion happens in [`PageRequest`].
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ListUrlsQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

impl ListUrlsQuery {
    /// Builds the parameters from decoded query pairs.
    pub fn from_pairs<K, V>(pairs: &[(K, V)]) -> Self
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let first = |key: &str| {
            pairs
                .iter()
                .find(|(k, _)| k.as_ref() == key)
                .and_then(|(_, v)| v.as_ref().parse::<i64>().ok())
        };

        Self {
            page: first("page"),
            limit: first("limit"),
        }
    }

    pub fn page_request(&self) -> PageRequest {
        PageRequest::new(self.page, self.limit)
    }
}

/// A single record in the listing. `created_at` is intentionally left out.
#[derive(Debug, Serialize)]
pub struct UrlItem {
    pub alias: String,
    pub url: String,
    pub clicks: i64,
}

impl From<LinkRecord> for UrlItem {
    fn from(record: LinkRecord) -> Self {
        Self {
            alias: record.alias,
            url: record.url,
            clicks: record.clicks,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListUrlsResponse {
    pub total: i64,
    pub page: i64,
    pub limit: i64,
    pub total_pages: i64,
    pub items: Vec<UrlItem>,
}

impl From<LinkPage> for ListUrlsResponse {
    fn from(page: LinkPage) -> Self {
        Self {
            total: page.total,
            page: page.page,
            limit: page.limit,
            total_pages: page.total_pages,
            items: page.items.into_iter().map(UrlItem::from).collect(),
        }
    }
}
