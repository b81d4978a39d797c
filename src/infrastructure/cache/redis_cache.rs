//! Redis-backed cache implementation.

use super::service::{CacheError, CacheResult, CacheService};
use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::{debug, error, info, warn};

/// Redis cache for hot redirect lookups.
///
/// Expiry is delegated to Redis key TTLs. All operations are fail-open:
/// errors are logged and reported as misses or no-ops.
pub struct RedisCache {
    client: ConnectionManager,
    default_ttl: u64,
    key_prefix: &'static str,
}

impl RedisCache {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// `default_ttl_seconds` is applied when [`CacheService::store_target`]
    /// is called without an explicit TTL.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::ConnectionError`] if the URL is invalid, the
    /// connection cannot be established, or the PING fails.
    pub async fn connect(redis_url: &str, default_ttl_seconds: u64) -> CacheResult<Self> {
        info!("Connecting to Redis");

        let client = Client::open(redis_url).map_err(|e| {
            CacheError::ConnectionError(format!("Failed to create Redis client: {}", e))
        })?;

        let manager = ConnectionManager::new(client).await.map_err(|e| {
            CacheError::ConnectionError(format!("Failed to connect to Redis: {}", e))
        })?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| CacheError::ConnectionError(format!("Redis PING failed: {}", e)))?;

        info!("Connected to Redis");

        Ok(Self {
            client: manager,
            default_ttl: default_ttl_seconds,
            key_prefix: "link:",
        })
    }

    fn build_key(&self, code: &str) -> String {
        format!("{}{}", self.key_prefix, code)
    }
}

#[async_trait]
impl CacheService for RedisCache {
    async fn get_target(&self, code: &str) -> CacheResult<Option<String>> {
        let key = self.build_key(code);
        let mut conn = self.client.clone();

        match conn.get::<_, Option<String>>(&key).await {
            Ok(Some(url)) => {
                debug!(code, "Cache HIT");
                Ok(Some(url))
            }
            Ok(None) => {
                debug!(code, "Cache MISS");
                Ok(None)
            }
            Err(e) => {
                error!(code, error = %e, "Redis GET error");
                Ok(None)
            }
        }
    }

    async fn store_target(
        &self,
        code: &str,
        target_url: &str,
        ttl_seconds: Option<u64>,
    ) -> CacheResult<()> {
        let key = self.build_key(code);
        let mut conn = self.client.clone();
        let ttl = ttl_seconds.unwrap_or(self.default_ttl);

        match conn.set_ex::<_, _, ()>(&key, target_url, ttl).await {
            Ok(_) => {
                debug!(code, ttl, "Cache SET");
                Ok(())
            }
            Err(e) => {
                warn!(code, error = %e, "Redis SET error");
                Ok(())
            }
        }
    }

    async fn invalidate(&self, code: &str) -> CacheResult<()> {
        let key = self.build_key(code);
        let mut conn = self.client.clone();

        match conn.del::<_, i32>(&key).await {
            Ok(deleted) => {
                if deleted > 0 {
                    debug!(code, "Cache INVALIDATE");
                }
                Ok(())
            }
            Err(e) => {
                warn!(code, error = %e, "Redis DEL error");
                Ok(())
            }
        }
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }
}
