//! Cache service trait and error types.

use async_trait::async_trait;
use std::fmt;

/// Errors that can occur during cache operations.
#[derive(Debug)]
pub enum CacheError {
    ConnectionError(String),
    OperationError(String),
}

impl fmt::Display for CacheError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::ConnectionError(e) => write!(f, "Cache connection error: {}", e),
            Self::OperationError(e) => write!(f, "Cache operation error: {}", e),
        }
    }
}

impl std::error::Error for CacheError {}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Trait for caching short code to target URL mappings.
///
/// The cache never owns the mapping; it is a TTL-bounded shadow of the entry
/// store. Implementations are fail-open: an unreachable backend degrades to a
/// cache miss and must never disrupt the request path. Consistency with the
/// store is only guaranteed to converge within one TTL window.
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Retrieves the target URL for a short code.
    ///
    /// Returns `Ok(None)` on miss, expiry, or backend error.
    async fn get_target(&self, code: &str) -> CacheResult<Option<String>>;

    /// Stores a mapping with an optional TTL override in seconds.
    ///
    /// Without an override the implementation's default TTL applies. Errors
    /// are logged and swallowed.
    async fn store_target(
        &self,
        code: &str,
        target_url: &str,
        ttl_seconds: Option<u64>,
    ) -> CacheResult<()>;

    /// Evicts a mapping, used when a link is deleted.
    async fn invalidate(&self, code: &str) -> CacheResult<()>;

    /// Reports whether the cache backend is reachable.
    async fn health_check(&self) -> bool;
}
