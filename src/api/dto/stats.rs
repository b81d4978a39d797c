//! DTOs for the per-link statistics endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A single visit record in a stats response.
#[derive(Debug, Serialize)]
pub struct VisitInfo {
    pub caller_ip: Option<String>,
    pub visited_at: DateTime<Utc>,
}

/// Statistics for one short link: entry metadata plus recent visits.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub short_code: String,
    pub original_url: String,
    pub short_url: String,
    pub created_at: DateTime<Utc>,
    pub clicks: i64,
    pub recent_visits: Vec<VisitInfo>,
}
