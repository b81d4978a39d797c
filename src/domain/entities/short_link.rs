//! Short link entity representing an identifier to URL mapping.

use chrono::{DateTime, Utc};

/// A short link entry owned by the store.
///
/// `code` and `target_url` are immutable once the entry is created; pointing a
/// code at a new target requires issuing a new entry. `click_count` only ever
/// increases.
#[derive(Debug, Clone)]
pub struct ShortLink {
    pub id: i64,
    pub code: String,
    pub target_url: String,
    pub created_at: DateTime<Utc>,
    pub click_count: i64,
}

impl ShortLink {
    pub fn new(
        id: i64,
        code: String,
        target_url: String,
        created_at: DateTime<Utc>,
        click_count: i64,
    ) -> Self {
        Self {
            id,
            code,
            target_url,
            created_at,
            click_count,
        }
    }
}

/// Input data for creating a new short link.
#[derive(Debug, Clone)]
pub struct NewShortLink {
    pub code: String,
    pub target_url: String,
}
