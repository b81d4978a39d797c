//! No-op cache implementation for disabled caching.

use super::service::{CacheResult, CacheService};
use async_trait::async_trait;

/// A cache that stores nothing.
///
/// Every read is a miss, so all lookups fall through to the entry store.
/// Useful in tests that must observe store behavior without cache effects.
pub struct NullCache;

impl NullCache {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NullCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CacheService for NullCache {
    async fn get_target(&self, _code: &str) -> CacheResult<Option<String>> {
        Ok(None)
    }

    async fn store_target(
        &self,
        _code: &str,
        _target_url: &str,
        _ttl_seconds: Option<u64>,
    ) -> CacheResult<()> {
        Ok(())
    }

    async fn invalidate(&self, _code: &str) -> CacheResult<()> {
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }
}
