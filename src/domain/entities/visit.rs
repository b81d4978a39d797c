//! Visit entity for per-click analytics records.

use chrono::{DateTime, Utc};

/// A recorded resolve of a short link.
///
/// Append-only; rows reference the link by id but are owned by the analytics
/// side of the schema, not by the link entry itself.
#[derive(Debug, Clone)]
pub struct Visit {
    pub id: i64,
    pub link_id: i64,
    pub caller_ip: Option<String>,
    pub visited_at: DateTime<Utc>,
}

/// Input data for appending a visit record.
#[derive(Debug, Clone)]
pub struct NewVisit {
    pub link_id: i64,
    pub caller_ip: Option<String>,
}
