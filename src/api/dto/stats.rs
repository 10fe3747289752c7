//! DTOs for the aggregate statistics endpoint.

use serde::Serialize;

use crate::domain::entities::{LinkRecord, LinkStats};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub total_urls: i64,
    pub total_clicks: i64,
    /// Omitted entirely when the store is empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_url: Option<TopUrl>,
}

/// The most clicked record.
#[derive(Debug, Serialize)]
pub struct TopUrl {
    pub alias: String,
    pub url: String,
    pub clicks: i64,
}

impl From<LinkRecord> for TopUrl {
    fn from(record: LinkRecord) -> Self {
        Self {
            alias: record.alias,
            url: record.url,
            clicks: record.clicks,
        }
    }
}

impl From<LinkStats> for StatsResponse {
    fn from(stats: LinkStats) -> Self {
        Self {
            total_urls: stats.total_urls,
            total_clicks: stats.total_clicks,
            top_url: stats.top_link.map(TopUrl::from),
        }
    }
}
