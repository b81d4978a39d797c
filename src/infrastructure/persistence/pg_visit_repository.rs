//! PostgreSQL implementation of the visit analytics store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewVisit, Visit};
use crate::domain::repositories::VisitRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct VisitRow {
    id: i64,
    link_id: i64,
    caller_ip: Option<String>,
    visited_at: DateTime<Utc>,
}

impl From<VisitRow> for Visit {
    fn from(row: VisitRow) -> Self {
        Visit {
            id: row.id,
            link_id: row.link_id,
            caller_ip: row.caller_ip,
            visited_at: row.visited_at,
        }
    }
}

/// PostgreSQL repository for the append-only visit log.
pub struct PgVisitRepository {
    pool: Arc<PgPool>,
}

impl PgVisitRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VisitRepository for PgVisitRepository {
    async fn record(&self, visit: NewVisit) -> Result<(), AppError> {
        sqlx::query("INSERT INTO visits (link_id, caller_ip) VALUES ($1, $2)")
            .bind(visit.link_id)
            .bind(&visit.caller_ip)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }

    async fn recent_for_link(&self, link_id: i64, limit: i64) -> Result<Vec<Visit>, AppError> {
        let rows = sqlx::query_as::<_, VisitRow>(
            r#"
            SELECT id, link_id, caller_ip, visited_at
            FROM visits
            WHERE link_id = $1
            ORDER BY visited_at DESC
            LIMIT $2
            "#,
        )
        .bind(link_id)
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
