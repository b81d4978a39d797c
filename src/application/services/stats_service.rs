//! Click statistics and popularity queries.

use std::sync::Arc;

use crate::domain::entities::{ShortLink, Visit};
use crate::domain::repositories::{LinkRepository, VisitRepository};
use crate::error::AppError;
use serde_json::json;

/// Link metadata combined with its most recent visits.
#[derive(Debug)]
pub struct LinkStats {
    pub link: ShortLink,
    pub recent_visits: Vec<Visit>,
}

/// Service for per-link statistics and popularity listings.
pub struct StatsService {
    links: Arc<dyn LinkRepository>,
    visits: Arc<dyn VisitRepository>,
}

impl StatsService {
    pub fn new(links: Arc<dyn LinkRepository>, visits: Arc<dyn VisitRepository>) -> Self {
        Self { links, visits }
    }

    /// Returns link metadata and its latest visits, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is unknown.
    pub async fn get_stats(&self, code: &str, visit_limit: i64) -> Result<LinkStats, AppError> {
        let link = self.links.find_by_code(code).await?.ok_or_else(|| {
            AppError::not_found("Short link not found", json!({ "code": code }))
        })?;

        let recent_visits = self.visits.recent_for_link(link.id, visit_limit).await?;

        Ok(LinkStats {
            link,
            recent_visits,
        })
    }

    /// Returns the most clicked links, ties broken by creation time ascending.
    pub async fn top_links(&self, limit: i64) -> Result<Vec<ShortLink>, AppError> {
        self.links.list_by_clicks(limit).await
    }

    /// Total number of stored links. Used by the health endpoint as a cheap
    /// database liveness probe.
    pub async fn link_count(&self) -> Result<i64, AppError> {
        self.links.count().await
    }
}
