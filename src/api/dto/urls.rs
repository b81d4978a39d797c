//! DTOs for link creation and listing endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::ShortLink;

/// Request to shorten a single URL.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUrlRequest {
    /// The target URL (must carry an http or https scheme).
    #[validate(length(min = 1, max = 2048))]
    pub original_url: String,

    /// Optional caller-chosen short code.
    #[validate(length(min = 4, max = 32))]
    pub custom_code: Option<String>,
}

/// JSON representation of a short link entry.
#[derive(Debug, Serialize)]
pub struct UrlResponse {
    pub short_code: String,
    pub original_url: String,
    pub short_url: String,
    pub created_at: DateTime<Utc>,
    pub clicks: i64,
}

impl UrlResponse {
    pub fn from_link(link: ShortLink, short_url: String) -> Self {
        Self {
            short_code: link.code,
            original_url: link.target_url,
            short_url,
            created_at: link.created_at,
            clicks: link.click_count,
        }
    }
}

/// Query parameters for the top links listing.
#[derive(Debug, Deserialize)]
pub struct ListUrlsQuery {
    pub limit: Option<i64>,
}

/// Response for the top links listing, ordered by click count descending.
#[derive(Debug, Serialize)]
pub struct UrlListResponse {
    pub items: Vec<UrlResponse>,
}
