//! API route configuration.

use axum::{
    Router,
    routing::{delete, get, post},
};
use tower_http::cors::CorsLayer;

use crate::api::handlers::{
    create_url_handler, delete_url_handler, list_urls_handler, stats_handler,
};
use crate::state::AppState;

/// Routes mounted under `/api`.
///
/// # Endpoints
///
/// - `POST   /urls`               - Create a short link
/// - `GET    /urls`               - List the most clicked links
/// - `DELETE /urls/{code}`        - Delete a short link
/// - `GET    /urls/{code}/stats`  - Statistics for a specific link
///
/// All API routes allow cross-origin requests from any origin.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/urls", post(create_url_handler).get(list_urls_handler))
        .route("/urls/{code}", delete(delete_url_handler))
        .route("/urls/{code}/stats", get(stats_handler))
        .layer(CorsLayer::permissive())
}
