//! Handler for per-link statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::stats::{StatsResponse, VisitInfo};
use crate::error::AppError;
use crate::state::AppState;

/// Number of recent visits included in a stats response.
const RECENT_VISITS: i64 = 20;

/// Returns metadata, click count, and recent visits for a short link.
///
/// # Endpoint
///
/// `GET /api/urls/{code}/stats`
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn stats_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<StatsResponse>, AppError> {
    let stats = state.stats_service.get_stats(&code, RECENT_VISITS).await?;

    let short_url = state.link_service.short_url(&stats.link.code);

    let recent_visits = stats
        .recent_visits
        .into_iter()
        .map(|v| VisitInfo {
            caller_ip: v.caller_ip,
            visited_at: v.visited_at,
        })
        .collect();

    Ok(Json(StatsResponse {
        short_code: stats.link.code,
        original_url: stats.link.target_url,
        short_url,
        created_at: stats.link.created_at,
        clicks: stats.link.click_count,
        recent_visits,
    }))
}
