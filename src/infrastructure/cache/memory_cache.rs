//! In-process cache with per-entry TTL.

use super::service::{CacheResult, CacheService};
use async_trait::async_trait;
use moka::future::Cache;
use moka::policy::Expiry;
use std::time::{Duration, Instant};
use tracing::debug;

/// Cached mapping plus the TTL it was stored with, so the expiry policy
/// can honor per-entry overrides.
#[derive(Clone)]
struct Entry {
    target_url: String,
    ttl: Duration,
}

struct EntryExpiry;

impl Expiry<String, Entry> for EntryExpiry {
    fn expire_after_create(
        &self,
        _key: &String,
        value: &Entry,
        _created_at: Instant,
    ) -> Option<Duration> {
        Some(value.ttl)
    }
}

/// Upper bound on cached mappings before eviction kicks in.
const MAX_CAPACITY: u64 = 4096;

/// Process-local cache used when Redis is not configured.
///
/// Backed by a bounded `moka` cache: each entry carries its own TTL and the
/// least recently used mappings are evicted once capacity is reached.
pub struct MemoryCache {
    entries: Cache<String, Entry>,
    default_ttl: Duration,
}

impl MemoryCache {
    pub fn new(default_ttl: Duration) -> Self {
        debug!(ttl_seconds = default_ttl.as_secs(), "Using in-memory cache");
        let entries = Cache::builder()
            .max_capacity(MAX_CAPACITY)
            .expire_after(EntryExpiry)
            .build();
        Self {
            entries,
            default_ttl,
        }
    }
}

#[async_trait]
impl CacheService for MemoryCache {
    async fn get_target(&self, code: &str) -> CacheResult<Option<String>> {
        Ok(self.entries.get(code).await.map(|e| e.target_url))
    }

    async fn store_target(
        &self,
        code: &str,
        target_url: &str,
        ttl_seconds: Option<u64>,
    ) -> CacheResult<()> {
        let ttl = ttl_seconds.map_or(self.default_ttl, Duration::from_secs);
        self.entries
            .insert(
                code.to_string(),
                Entry {
                    target_url: target_url.to_string(),
                    ttl,
                },
            )
            .await;

        Ok(())
    }

    async fn invalidate(&self, code: &str) -> CacheResult<()> {
        self.entries.invalidate(code).await;
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }
}
