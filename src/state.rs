//! Shared application state injected into all handlers.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::application::services::{LinkService, StatsService};
use crate::domain::click_event::ClickEvent;
use crate::infrastructure::cache::CacheService;

#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    pub stats_service: Arc<StatsService>,
    pub cache: Arc<dyn CacheService>,
    pub click_sender: mpsc::Sender<ClickEvent>,
    /// When true, client IPs are read from forwarding headers.
    pub behind_proxy: bool,
}

impl AppState {
    pub fn new(
        link_service: Arc<LinkService>,
        stats_service: Arc<StatsService>,
        cache: Arc<dyn CacheService>,
        click_sender: mpsc::Sender<ClickEvent>,
        behind_proxy: bool,
    ) -> Self {
        Self {
            link_service,
            stats_service,
            cache,
            click_sender,
            behind_proxy,
        }
    }
}
