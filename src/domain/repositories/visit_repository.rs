//! Repository trait for append-only visit records.

use crate::domain::entities::{NewVisit, Visit};
use crate::error::AppError;
use async_trait::async_trait;

/// Analytics store interface for visit records.
///
/// Visits are append-only; there is no update or delete path. Rows for a link
/// are removed only when the link itself is deleted (cascade).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VisitRepository: Send + Sync {
    /// Appends a visit record.
    async fn record(&self, visit: NewVisit) -> Result<(), AppError>;

    /// Returns the most recent visits for a link, newest first.
    async fn recent_for_link(&self, link_id: i64, limit: i64) -> Result<Vec<Visit>, AppError>;
}
