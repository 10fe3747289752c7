//! PostgreSQL implementation of the alias store.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{LinkRecord, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Row shape of the `urls` table. `clicks` is read through `COALESCE` and
/// `created_at` as an option since both columns are nullable. A missing
/// timestamp is reported as the Unix epoch.
#[derive(Debug, FromRow)]
struct UrlRow {
    id: i32,
    alias: String,
    url: String,
    clicks: i32,
    created_at: Option<NaiveDateTime>,
}

impl From<UrlRow> for LinkRecord {
    fn from(row: UrlRow) -> Self {
        LinkRecord::new(
            i64::from(row.id),
            row.alias,
            row.url,
            i64::from(row.clicks),
            row.created_at.map(|t| t.and_utc()).unwrap_or_default(),
        )
    }
}

/// PostgreSQL repository for the `urls` table.
///
/// Uniqueness of `alias` is enforced by the table's unique constraint; a
/// violating insert surfaces as [`AppError::Conflict`].
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn insert(&self, new_link: NewLink) -> Result<LinkRecord, AppError> {
        let row = sqlx::query_as::<_, UrlRow>(
            r#"
            INSERT INTO urls (alias, url, clicks)
            VALUES ($1, $2, 0)
            RETURNING id, alias, url, COALESCE(clicks, 0) AS clicks, created_at
            "#,
        )
        .bind(&new_link.alias)
        .bind(&new_link.url)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn delete(&self, alias: &str) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM urls WHERE alias = $1")
            .bind(alias)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM urls")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<LinkRecord>, AppError> {
        let rows = sqlx::query_as::<_, UrlRow>(
            r#"
            SELECT id, alias, url, COALESCE(clicks, 0) AS clicks, created_at
            FROM urls
            ORDER BY created_at DESC NULLS LAST, id DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(LinkRecord::from).collect())
    }

    async fn total_clicks(&self) -> Result<i64, AppError> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COALESCE(SUM(clicks), 0)::BIGINT FROM urls")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(total)
    }

    async fn top_link(&self) -> Result<Option<LinkRecord>, AppError> {
        let row = sqlx::query_as::<_, UrlRow>(
            r#"
            SELECT id, alias, url, COALESCE(clicks, 0) AS clicks, created_at
            FROM urls
            ORDER BY COALESCE(clicks, 0) DESC, id ASC
            LIMIT 1
            "#,
        )
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(LinkRecord::from))
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }
}
