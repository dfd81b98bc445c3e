//! Sliding-window request limiter

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use pa_shared::config::RateLimitConfig;
use tokio::sync::Mutex;
use tracing::debug;

use crate::clock::Clock;

/// Rate limiting service trait for throttling OTP issuance per key
#[async_trait]
pub trait RateLimiter: Send + Sync {
    /// Check whether a request for `key` fits the limit and record it if so
    ///
    /// Returns `Ok(true)` when the request was admitted and counted,
    /// `Ok(false)` when the key has exhausted its window. Denied
    /// requests are not counted against the limit.
    async fn admit(&self, key: &str) -> Result<bool, String>;
}

/// In-memory sliding-window limiter keyed by an opaque string.
///
/// Each admitted request is recorded with its timestamp. On every call
/// the key's history is pruned to the configured window before the
/// limit check, so the limit applies to the trailing window rather
/// than fixed intervals.
pub struct SlidingWindowRateLimiter {
    requests: Mutex<HashMap<String, Vec<DateTime<Utc>>>>,
    limit: usize,
    window: Duration,
    clock: Arc<dyn Clock>,
}

impl SlidingWindowRateLimiter {
    /// Create a limiter from configuration and a time source
    pub fn new(config: &RateLimitConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            requests: Mutex::new(HashMap::new()),
            limit: config.limit as usize,
            window: config.window(),
            clock,
        }
    }

    /// Number of requests currently counted against `key`
    pub async fn recorded(&self, key: &str) -> usize {
        let now = self.clock.now();
        let requests = self.requests.lock().await;
        requests
            .get(key)
            .map(|stamps| stamps.iter().filter(|t| now - **t < self.window).count())
            .unwrap_or(0)
    }
}

#[async_trait]
impl RateLimiter for SlidingWindowRateLimiter {
    async fn admit(&self, key: &str) -> Result<bool, String> {
        let now = self.clock.now();
        let mut requests = self.requests.lock().await;

        let stamps = requests.entry(key.to_string()).or_default();
        stamps.retain(|t| now - *t < self.window);

        if stamps.len() >= self.limit {
            debug!(
                key = %key,
                recorded = stamps.len(),
                limit = self.limit,
                event = "rate_limit_window_full",
                "Request denied by sliding window"
            );
            return Ok(false);
        }

        stamps.push(now);
        Ok(true)
    }
}
