//! HTTP server initialization and runtime setup.
//!
//! Handles database connections, cache setup, worker spawning, and Axum server lifecycle.

use crate::api::middleware::FixedWindowLimiter;
use crate::application::services::{LinkService, StatsService};
use crate::config::Config;
use crate::domain::click_worker::run_click_worker;
use crate::infrastructure::cache::{CacheService, MemoryCache, RedisCache};
use crate::infrastructure::persistence::{PgLinkRepository, PgVisitRepository};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool and migrations
/// - Redis cache (or in-process cache fallback)
/// - Background click worker
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .connect(&config.database_url)
        .await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations").run(&pool).await?;

    let cache: Arc<dyn CacheService> = if let Some(redis_url) = &config.redis_url {
        match RedisCache::connect(redis_url, config.cache_ttl_seconds).await {
            Ok(redis) => {
                tracing::info!("Cache enabled (Redis)");
                Arc::new(redis)
            }
            Err(e) => {
                tracing::warn!("Failed to connect to Redis: {}. Using in-process cache.", e);
                Arc::new(MemoryCache::new(Duration::from_secs(
                    config.cache_ttl_seconds,
                )))
            }
        }
    } else {
        tracing::info!("Cache enabled (in-process)");
        Arc::new(MemoryCache::new(Duration::from_secs(
            config.cache_ttl_seconds,
        )))
    };

    let pool = Arc::new(pool);
    let link_repository = Arc::new(PgLinkRepository::new(pool.clone()));
    let visit_repository = Arc::new(PgVisitRepository::new(pool.clone()));

    let (click_tx, click_rx) = mpsc::channel(config.click_queue_capacity);
    tokio::spawn(run_click_worker(
        click_rx,
        link_repository.clone(),
        visit_repository.clone(),
    ));
    tracing::info!("Click worker started");

    let link_service = Arc::new(LinkService::new(
        link_repository.clone(),
        config.code_length,
        config.base_url.clone(),
    ));
    let stats_service = Arc::new(StatsService::new(link_repository, visit_repository));

    let state = AppState::new(
        link_service,
        stats_service,
        cache,
        click_tx,
        config.behind_proxy,
    );

    let limiter = Arc::new(FixedWindowLimiter::new(
        config.rate_limit_max_requests,
        Duration::from_secs(config.rate_limit_window_seconds),
        config.behind_proxy,
    ));

    let app = app_router(state, limiter);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .await?;

    Ok(())
}
