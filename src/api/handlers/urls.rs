//! Handlers for link creation, deletion, and listing.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use tracing::{info, warn};
use validator::Validate;

use crate::api::dto::urls::{CreateUrlRequest, ListUrlsQuery, UrlListResponse, UrlResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Default and maximum page sizes for the top links listing.
const DEFAULT_LIST_LIMIT: i64 = 10;
const MAX_LIST_LIMIT: i64 = 100;

/// Creates a short link.
///
/// # Endpoint
///
/// `POST /api/urls`
///
/// # Request Body
///
/// ```json
/// {
///   "original_url": "https://example.com/some/long/path",
///   "custom_code": "my-link"  // optional
/// }
/// ```
///
/// # Errors
///
/// - 400 for a malformed URL or custom code
/// - 409 if the custom code is already taken
pub async fn create_url_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateUrlRequest>,
) -> Result<(StatusCode, Json<UrlResponse>), AppError> {
    payload.validate()?;

    let link = state
        .link_service
        .create_link(payload.original_url, payload.custom_code)
        .await?;

    info!(code = %link.code, "Short link created");

    let short_url = state.link_service.short_url(&link.code);

    Ok((StatusCode::CREATED, Json(UrlResponse::from_link(link, short_url))))
}

/// Deletes a short link and evicts it from the cache.
///
/// # Endpoint
///
/// `DELETE /api/urls/{code}`
///
/// # Errors
///
/// Returns 404 if the code is unknown.
pub async fn delete_url_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.link_service.delete_link(&code).await?;

    if let Err(e) = state.cache.invalidate(&code).await {
        warn!(code = %code, error = %e, "Failed to invalidate cache entry");
    }

    info!(code = %code, "Short link deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// Lists the most clicked links.
///
/// # Endpoint
///
/// `GET /api/urls?limit=10`
///
/// `limit` defaults to 10 and is capped at 100.
pub async fn list_urls_handler(
    Query(query): Query<ListUrlsQuery>,
    State(state): State<AppState>,
) -> Result<Json<UrlListResponse>, AppError> {
    let limit = query
        .limit
        .unwrap_or(DEFAULT_LIST_LIMIT)
        .clamp(1, MAX_LIST_LIMIT);

    let links = state.stats_service.top_links(limit).await?;

    let items = links
        .into_iter()
        .map(|link| {
            let short_url = state.link_service.short_url(&link.code);
            UrlResponse::from_link(link, short_url)
        })
        .collect();

    Ok(Json(UrlListResponse { items }))
}
