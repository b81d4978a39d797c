mod common;

use axum::Router;
use axum_test::TestServer;
use linksnip::api;
use linksnip::domain::entities::NewVisit;
use linksnip::domain::repositories::{LinkRepository, VisitRepository};
use linksnip::state::AppState;
use serde_json::Value;

fn api_server(state: AppState) -> TestServer {
    let app = Router::new()
        .nest("/api", api::routes::api_routes())
        .with_state(state);
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_stats_unknown_code() {
    let (state, _rx, _repos) = common::create_test_state();
    let server = api_server(state);

    let response = server.get("/api/urls/missing/stats").await;

    response.assert_status_not_found();

    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "not_found");
}

#[tokio::test]
async fn test_stats_reflect_clicks_and_visits() {
    let (state, _rx, repos) = common::create_test_state();
    let link = repos.links.seed("stats1", "https://example.com/page");

    for _ in 0..3 {
        repos.links.increment_clicks("stats1").await.unwrap();
    }

    repos
        .visits
        .record(NewVisit {
            link_id: link.id,
            caller_ip: Some("10.0.0.1".to_string()),
        })
        .await
        .unwrap();
    repos
        .visits
        .record(NewVisit {
            link_id: link.id,
            caller_ip: None,
        })
        .await
        .unwrap();

    let server = api_server(state);

    let response = server.get("/api/urls/stats1/stats").await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["short_code"], "stats1");
    assert_eq!(body["original_url"], "https://example.com/page");
    assert_eq!(body["clicks"], 3);
    assert_eq!(body["recent_visits"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_stats_only_include_own_visits() {
    let (state, _rx, repos) = common::create_test_state();
    let first = repos.links.seed("first", "https://example.com/1");
    let second = repos.links.seed("second", "https://example.com/2");

    repos
        .visits
        .record(NewVisit {
            link_id: first.id,
            caller_ip: Some("10.0.0.1".to_string()),
        })
        .await
        .unwrap();
    repos
        .visits
        .record(NewVisit {
            link_id: second.id,
            caller_ip: Some("10.0.0.2".to_string()),
        })
        .await
        .unwrap();

    let server = api_server(state);

    let response = server.get("/api/urls/first/stats").await;
    let body: Value = response.json();

    let visits = body["recent_visits"].as_array().unwrap();
    assert_eq!(visits.len(), 1);
    assert_eq!(visits[0]["caller_ip"], "10.0.0.1");
}
