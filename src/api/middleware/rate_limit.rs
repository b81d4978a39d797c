//! Fixed-window request rate limiting keyed by client IP.
//!
//! Each key gets a counter that resets when its window expires. Requests
//! over the per-window maximum are rejected with 429. State lives in
//! process memory, so limits apply per instance.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

use axum::extract::{ConnectInfo, Request, State};
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::net::SocketAddr;

use crate::error::AppError;
use crate::utils::client_ip::client_ip;

/// Counter state for one key within the current window.
struct RateWindow {
    count: u32,
    expires_at: Instant,
}

/// In-memory fixed-window rate limiter.
pub struct FixedWindowLimiter {
    max_requests: u32,
    window: Duration,
    behind_proxy: bool,
    windows: Mutex<HashMap<String, RateWindow>>,
}

/// Stale entries are swept once the map grows past this size.
const SWEEP_THRESHOLD: usize = 8192;

impl FixedWindowLimiter {
    pub fn new(max_requests: u32, window: Duration, behind_proxy: bool) -> Self {
        Self {
            max_requests,
            window,
            behind_proxy,
            windows: Mutex::new(HashMap::new()),
        }
    }

    /// Registers one request for `key`. Returns `Err` with a 429 error
    /// once the window's budget is spent.
    pub fn check(&self, key: &str) -> Result<(), AppError> {
        let now = Instant::now();
        let mut windows = self
            .windows
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        if windows.len() > SWEEP_THRESHOLD {
            windows.retain(|_, w| w.expires_at > now);
        }

        let window = windows.entry(key.to_string()).or_insert(RateWindow {
            count: 0,
            expires_at: now + self.window,
        });

        if window.expires_at <= now {
            window.count = 0;
            window.expires_at = now + self.window;
        }

        if window.count >= self.max_requests {
            let retry_after = window.expires_at.saturating_duration_since(now);
            return Err(AppError::rate_limited(
                "too many requests, slow down",
                serde_json::json!({ "retry_after_seconds": retry_after.as_secs().max(1) }),
            ));
        }

        window.count += 1;
        Ok(())
    }
}

/// Axum middleware enforcing the limiter for every routed request.
pub async fn enforce(
    State(limiter): State<Arc<FixedWindowLimiter>>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    request: Request,
    next: Next,
) -> Response {
    let key = client_ip(&headers, peer, limiter.behind_proxy);
    match limiter.check(&key) {
        Ok(()) => next.run(request).await,
        Err(err) => {
            tracing::debug!(client = %key, "rate limit exceeded");
            err.into_response()
        }
    }
}
