//! In-process implementation of the alias store.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use tokio::sync::RwLock;

use crate::domain::entities::{LinkRecord, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

#[derive(Debug, Default)]
struct Table {
    rows: Vec<LinkRecord>,
    next_id: i64,
}

impl Table {
    fn push(&mut self, alias: String, url: String, clicks: i64) -> Result<LinkRecord, AppError> {
        if self.rows.iter().any(|r| r.alias == alias) {
            return Err(AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": "urls_alias_key" }),
            ));
        }

        self.next_id += 1;
        let record = LinkRecord::new(self.next_id, alias, url, clicks, Utc::now());
        self.rows.push(record.clone());
        Ok(record)
    }
}

/// Store kept in process memory, mirroring the PostgreSQL semantics:
/// unique aliases, newest-first listing, and oldest-wins tie-break for the
/// most clicked record.
///
/// Each instance is independent, which makes it suitable for isolated tests.
#[derive(Debug, Default)]
pub struct InMemoryLinkRepository {
    table: RwLock<Table>,
}

impl InMemoryLinkRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a record with a preset click count.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the alias already exists.
    pub async fn seed(&self, alias: &str, url: &str, clicks: i64) -> Result<LinkRecord, AppError> {
        self.table
            .write()
            .await
            .push(alias.to_string(), url.to_string(), clicks.max(0))
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn insert(&self, new_link: NewLink) -> Result<LinkRecord, AppError> {
        self.table
            .write()
            .await
            .push(new_link.alias, new_link.url, 0)
    }

    async fn delete(&self, alias: &str) -> Result<bool, AppError> {
        let mut table = self.table.write().await;
        let before = table.rows.len();
        table.rows.retain(|r| r.alias != alias);
        Ok(table.rows.len() < before)
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.table.read().await.rows.len() as i64)
    }

    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<LinkRecord>, AppError> {
        let table = self.table.read().await;
        let mut rows: Vec<&LinkRecord> = table.rows.iter().collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));

        let offset = usize::try_from(offset.max(0)).unwrap_or(usize::MAX);
        let limit = usize::try_from(limit.max(0)).unwrap_or(usize::MAX);

        Ok(rows.into_iter().skip(offset).take(limit).cloned().collect())
    }

    async fn total_clicks(&self) -> Result<i64, AppError> {
        Ok(self.table.read().await.rows.iter().map(|r| r.clicks).sum())
    }

    async fn top_link(&self) -> Result<Option<LinkRecord>, AppError> {
        let table = self.table.read().await;
        let top = table
            .rows
            .iter()
            .max_by(|a, b| a.clicks.cmp(&b.clicks).then(b.id.cmp(&a.id)));

        Ok(top.cloned())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
