//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /{code}`  - Short link redirect (rate limited)
//! - `GET  /health`  - Health check: DB, cache, click queue (not rate limited)
//! - `/api/*`        - REST API (rate limited)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP fixed window
//! - **Path normalization** - Trailing slash handling

use std::sync::Arc;

use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::rate_limit::{self, FixedWindowLimiter};
use crate::api::middleware::tracing;
use crate::state::AppState;

/// Constructs the application router with all routes and middleware.
///
/// The rate limiter covers the redirect and API routes but not `/health`,
/// so orchestrators can probe freely.
pub fn app_router(state: AppState, limiter: Arc<FixedWindowLimiter>) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/{code}", get(redirect_handler))
        .nest("/api", api::routes::api_routes())
        .route_layer(middleware::from_fn_with_state(limiter, rate_limit::enforce))
        .route("/health", get(health_handler))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
