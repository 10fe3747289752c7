//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A stored alias with its destination and click counter.
///
/// The alias is the record's identity. Neither `alias` nor `url` change after
/// creation; `clicks` is only ever advanced by the redirect path.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkRecord {
    pub id: i64,
    pub alias: String,
    pub url: String,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
}

impl LinkRecord {
    /// Creates a new LinkRecord instance.
    pub fn new(
        id: i64,
        alias: String,
        url: String,
        clicks: i64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            alias,
            url,
            clicks,
            created_at,
        }
    }
}

/// Input data for inserting a new record. Clicks start at zero.
#[derive(Debug, Clone, PartialEq)]
pub struct NewLink {
    pub alias: String,
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_record_creation() {
        let now = Utc::now();
        let record = LinkRecord::new(
            1,
            "aB3xY9".to_string(),
            "https://example.com".to_string(),
            0,
            now,
        );

        assert_eq!(record.id, 1);
        assert_eq!(record.alias, "aB3xY9");
        assert_eq!(record.url, "https://example.com");
        assert_eq!(record.clicks, 0);
        assert_eq!(record.created_at, now);
    }
}
