//! Aggregate statistics over the whole store.

use super::LinkRecord;

/// Totals across all records plus the most clicked one.
///
/// `top_link` is `None` only when the store is empty. When several records
/// share the highest click count the store decides which one is returned;
/// the choice is stable for an unchanged store.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkStats {
    pub total_urls: i64,
    pub total_clicks: i64,
    pub top_link: Option<LinkRecord>,
}
