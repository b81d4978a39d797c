//! Handler for short URL redirect.

use axum::{
    extract::{ConnectInfo, Path, State},
    http::HeaderMap,
    response::{IntoResponse, Redirect},
};
use std::net::SocketAddr;
use tracing::{debug, error};

use crate::domain::click_event::ClickEvent;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::client_ip::client_ip;

/// Redirects a short code to its target URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Check cache for the target URL
/// 2. On cache miss, query the entry store
/// 3. Asynchronously update the cache
/// 4. Send click event to the background worker
/// 5. Return 307 Temporary Redirect
///
/// # Cache Strategy
///
/// - **Cache hit**: immediate redirect, no database access
/// - **Cache miss**: query store, spawn async cache write
/// - **Cache error**: log and fall back to the store
///
/// # Click Tracking
///
/// Click events go to a bounded channel for async processing. If the
/// queue is full the click is dropped (fire-and-forget).
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
) -> Result<impl IntoResponse, AppError> {
    let target_url = match state.cache.get_target(&code).await {
        Ok(Some(cached_url)) => {
            debug!(code = %code, "Cache HIT");
            cached_url
        }
        Ok(None) => {
            debug!(code = %code, "Cache MISS");

            let link = state.link_service.get_link(&code).await?;

            // Asynchronously update cache (fire-and-forget)
            let cache = state.cache.clone();
            let cache_code = code.clone();
            let url = link.target_url.clone();
            tokio::spawn(async move {
                if let Err(e) = cache.store_target(&cache_code, &url, None).await {
                    error!(error = %e, "Failed to cache target URL");
                }
            });

            link.target_url
        }
        Err(e) => {
            error!(error = %e, "Cache error");

            let link = state.link_service.get_link(&code).await?;
            link.target_url
        }
    };

    let caller = client_ip(&headers, peer, state.behind_proxy);
    let _ = state
        .click_sender
        .try_send(ClickEvent::new(code, Some(caller)));

    Ok(Redirect::temporary(&target_url))
}
