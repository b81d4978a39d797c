//! Caching layer for fast redirect lookups.
//!
//! Provides a [`CacheService`] trait with three implementations:
//! - [`RedisCache`] - Redis-backed cache for multi-instance deployments
//! - [`MemoryCache`] - process-local TTL cache, the default without Redis
//! - [`NullCache`] - no-op implementation for cache-free testing

mod memory_cache;
mod null_cache;
mod redis_cache;
mod service;

pub use memory_cache::MemoryCache;
pub use null_cache::NullCache;
pub use redis_cache::RedisCache;
pub use service::{CacheError, CacheResult, CacheService};
