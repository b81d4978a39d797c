#![allow(dead_code)]

use async_trait::async_trait;
use axum::extract::ConnectInfo;
use chrono::Utc;
use linksnip::application::services::{LinkService, StatsService};
use linksnip::domain::click_event::ClickEvent;
use linksnip::domain::entities::{NewShortLink, NewVisit, ShortLink, Visit};
use linksnip::domain::repositories::{LinkRepository, VisitRepository};
use linksnip::error::AppError;
use linksnip::infrastructure::cache::{CacheService, MemoryCache};
use linksnip::state::AppState;
use serde_json::json;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::mpsc;

/// Entry store backed by a mutex-guarded map, for handler tests without
/// a live database.
pub struct InMemoryLinkRepository {
    links: Mutex<HashMap<String, ShortLink>>,
    next_id: AtomicI64,
}

impl InMemoryLinkRepository {
    pub fn new() -> Self {
        Self {
            links: Mutex::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Seeds a link directly, bypassing validation.
    pub fn seed(&self, code: &str, target_url: &str) -> ShortLink {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let link = ShortLink::new(
            id,
            code.to_string(),
            target_url.to_string(),
            Utc::now(),
            0,
        );
        self.links
            .lock()
            .unwrap()
            .insert(code.to_string(), link.clone());
        link
    }

    pub fn click_count(&self, code: &str) -> Option<i64> {
        self.links.lock().unwrap().get(code).map(|l| l.click_count)
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn create(&self, new_link: NewShortLink) -> Result<ShortLink, AppError> {
        let mut links = self.links.lock().unwrap();

        if links.contains_key(&new_link.code) {
            return Err(AppError::conflict(
                "Identifier already exists",
                json!({ "code": new_link.code }),
            ));
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let link = ShortLink::new(id, new_link.code.clone(), new_link.target_url, Utc::now(), 0);
        links.insert(new_link.code, link.clone());

        Ok(link)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<ShortLink>, AppError> {
        Ok(self.links.lock().unwrap().get(code).cloned())
    }

    async fn increment_clicks(&self, code: &str) -> Result<ShortLink, AppError> {
        let mut links = self.links.lock().unwrap();

        match links.get_mut(code) {
            Some(link) => {
                link.click_count += 1;
                Ok(link.clone())
            }
            None => Err(AppError::not_found(
                "Short link not found",
                json!({ "code": code }),
            )),
        }
    }

    async fn delete(&self, code: &str) -> Result<bool, AppError> {
        Ok(self.links.lock().unwrap().remove(code).is_some())
    }

    async fn list_by_clicks(&self, limit: i64) -> Result<Vec<ShortLink>, AppError> {
        let links = self.links.lock().unwrap();

        let mut all: Vec<ShortLink> = links.values().cloned().collect();
        all.sort_by(|a, b| {
            b.click_count
                .cmp(&a.click_count)
                .then(a.created_at.cmp(&b.created_at))
        });
        all.truncate(limit.max(0) as usize);

        Ok(all)
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.links.lock().unwrap().len() as i64)
    }
}

/// Append-only visit log backed by a mutex-guarded vector.
pub struct InMemoryVisitRepository {
    visits: Mutex<Vec<Visit>>,
    next_id: AtomicI64,
}

impl InMemoryVisitRepository {
    pub fn new() -> Self {
        Self {
            visits: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }

    pub fn visit_count(&self) -> usize {
        self.visits.lock().unwrap().len()
    }
}

#[async_trait]
impl VisitRepository for InMemoryVisitRepository {
    async fn record(&self, visit: NewVisit) -> Result<(), AppError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.visits.lock().unwrap().push(Visit {
            id,
            link_id: visit.link_id,
            caller_ip: visit.caller_ip,
            visited_at: Utc::now(),
        });
        Ok(())
    }

    async fn recent_for_link(&self, link_id: i64, limit: i64) -> Result<Vec<Visit>, AppError> {
        let visits = self.visits.lock().unwrap();

        let mut matching: Vec<Visit> = visits
            .iter()
            .filter(|v| v.link_id == link_id)
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.visited_at.cmp(&a.visited_at));
        matching.truncate(limit.max(0) as usize);

        Ok(matching)
    }
}

/// Handles to the stores behind a test state, for seeding and assertions.
pub struct TestRepos {
    pub links: Arc<InMemoryLinkRepository>,
    pub visits: Arc<InMemoryVisitRepository>,
}

pub fn create_test_state() -> (AppState, mpsc::Receiver<ClickEvent>, TestRepos) {
    create_test_state_with_cache(Arc::new(MemoryCache::new(Duration::from_secs(60))))
}

pub fn create_test_state_with_cache(
    cache: Arc<dyn CacheService>,
) -> (AppState, mpsc::Receiver<ClickEvent>, TestRepos) {
    let links = Arc::new(InMemoryLinkRepository::new());
    let visits = Arc::new(InMemoryVisitRepository::new());

    let (tx, rx) = mpsc::channel(100);

    let link_service = Arc::new(LinkService::new(
        links.clone(),
        6,
        "http://localhost:3000".to_string(),
    ));
    let stats_service = Arc::new(StatsService::new(links.clone(), visits.clone()));

    let state = AppState::new(link_service, stats_service, cache, tx, false);

    (state, rx, TestRepos { links, visits })
}

/// Injects a fixed peer address so handlers using `ConnectInfo` work under
/// `axum_test::TestServer`.
#[derive(Clone)]
pub struct MockConnectInfoLayer;

impl<S> tower::Layer<S> for MockConnectInfoLayer {
    type Service = MockConnectInfoService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MockConnectInfoService { inner }
    }
}

#[derive(Clone)]
pub struct MockConnectInfoService<S> {
    inner: S,
}

impl<S, B> tower::Service<axum::http::Request<B>> for MockConnectInfoService<S>
where
    S: tower::Service<axum::http::Request<B>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: axum::http::Request<B>) -> Self::Future {
        let addr: SocketAddr = "127.0.0.1:12345".parse().unwrap();
        req.extensions_mut().insert(ConnectInfo(addr));
        self.inner.call(req)
    }
}
