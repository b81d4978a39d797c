//! PostgreSQL implementation of the link entry store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewShortLink, ShortLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Database row shape for `short_links`.
#[derive(sqlx::FromRow)]
struct LinkRow {
    id: i64,
    code: String,
    target_url: String,
    created_at: DateTime<Utc>,
    click_count: i64,
}

impl From<LinkRow> for ShortLink {
    fn from(row: LinkRow) -> Self {
        ShortLink::new(
            row.id,
            row.code,
            row.target_url,
            row.created_at,
            row.click_count,
        )
    }
}

/// PostgreSQL repository for short link storage and retrieval.
///
/// Uses bound parameters throughout; the `code` unique constraint is the
/// authority on identifier uniqueness, so concurrent creates of the same code
/// surface as [`AppError::Conflict`] rather than racing.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn create(&self, new_link: NewShortLink) -> Result<ShortLink, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            INSERT INTO short_links (code, target_url)
            VALUES ($1, $2)
            RETURNING id, code, target_url, created_at, click_count
            "#,
        )
        .bind(&new_link.code)
        .bind(&new_link.target_url)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<ShortLink>, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            SELECT id, code, target_url, created_at, click_count
            FROM short_links
            WHERE code = $1
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn increment_clicks(&self, code: &str) -> Result<ShortLink, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            UPDATE short_links
            SET click_count = click_count + 1
            WHERE code = $1
            RETURNING id, code, target_url, created_at, click_count
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Into::into).ok_or_else(|| {
            AppError::not_found("Short link not found", json!({ "code": code }))
        })
    }

    async fn delete(&self, code: &str) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM short_links WHERE code = $1")
            .bind(code)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_by_clicks(&self, limit: i64) -> Result<Vec<ShortLink>, AppError> {
        let rows = sqlx::query_as::<_, LinkRow>(
            r#"
            SELECT id, code, target_url, created_at, click_count
            FROM short_links
            ORDER BY click_count DESC, created_at ASC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM short_links")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
