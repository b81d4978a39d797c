mod common;

use std::sync::Arc;
use std::time::Duration;

use axum::{Router, middleware, routing::get};
use axum_test::TestServer;
use common::MockConnectInfoLayer;
use linksnip::api::handlers::redirect_handler;
use linksnip::api::middleware::FixedWindowLimiter;
use linksnip::api::middleware::rate_limit;
use linksnip::state::AppState;
use serde_json::Value;

fn limited_server(state: AppState, limiter: Arc<FixedWindowLimiter>) -> TestServer {
    let app = Router::new()
        .route("/{code}", get(redirect_handler))
        .route_layer(middleware::from_fn_with_state(limiter, rate_limit::enforce))
        .layer(MockConnectInfoLayer)
        .with_state(state);
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_requests_within_budget_pass() {
    let (state, _rx, repos) = common::create_test_state();
    repos.links.seed("ok", "https://example.com");

    let limiter = Arc::new(FixedWindowLimiter::new(3, Duration::from_secs(60), false));
    let server = limited_server(state, limiter);

    for _ in 0..3 {
        let response = server.get("/ok").await;
        assert_eq!(response.status_code(), 307);
    }
}

#[tokio::test]
async fn test_request_over_budget_rejected() {
    let (state, _rx, repos) = common::create_test_state();
    repos.links.seed("ok", "https://example.com");

    let limiter = Arc::new(FixedWindowLimiter::new(2, Duration::from_secs(60), false));
    let server = limited_server(state, limiter);

    let _ = server.get("/ok").await;
    let _ = server.get("/ok").await;
    let response = server.get("/ok").await;

    assert_eq!(response.status_code(), 429);

    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "rate_limit_exceeded");
    assert!(body["error"]["details"]["retry_after_seconds"].as_u64().unwrap() >= 1);
}

#[tokio::test]
async fn test_budget_resets_after_window() {
    let (state, _rx, repos) = common::create_test_state();
    repos.links.seed("ok", "https://example.com");

    let limiter = Arc::new(FixedWindowLimiter::new(1, Duration::from_millis(50), false));
    let server = limited_server(state, limiter);

    assert_eq!(server.get("/ok").await.status_code(), 307);
    assert_eq!(server.get("/ok").await.status_code(), 429);

    tokio::time::sleep(Duration::from_millis(80)).await;

    assert_eq!(server.get("/ok").await.status_code(), 307);
}

#[tokio::test]
async fn test_not_found_requests_still_count() {
    let (state, _rx, _repos) = common::create_test_state();

    let limiter = Arc::new(FixedWindowLimiter::new(2, Duration::from_secs(60), false));
    let server = limited_server(state, limiter);

    assert_eq!(server.get("/missing").await.status_code(), 404);
    assert_eq!(server.get("/missing").await.status_code(), 404);
    assert_eq!(server.get("/missing").await.status_code(), 429);
}
