//! Per-host rate limiting between download requests.
//!
//! The original behavior this replaces is a flat one-second sleep after
//! every request. [`RateLimiter`] instead enforces a minimum delay between
//! successive requests to the same host, injected into the downloader so
//! pacing is configurable and testable without real wall-clock delays
//! (use [`RateLimiter::disabled`] or tokio's paused time in tests).
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//! use harvester_core::download::RateLimiter;
//! use url::Url;
//!
//! # async fn example() {
//! let limiter = Arc::new(RateLimiter::new(Duration::from_secs(1)));
//! let url = Url::parse("https://example.com/file1.pdf").unwrap();
//!
//! // First request to a host proceeds immediately; the next one to the
//! // same host waits out the remaining delay.
//! limiter.acquire(&url).await;
//! limiter.acquire(&url).await;
//! # }
//! ```

use std::sync::Arc;
use std::time::Duration;

use dashmap::DashMap;
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::{debug, instrument};
use url::Url;

/// Enforces a minimum delay between requests to the same host.
///
/// Safe to share across tasks behind an `Arc`; per-host state lives in a
/// `DashMap` whose shard lock is released before any await.
#[derive(Debug)]
pub struct RateLimiter {
    /// Minimum delay between requests to the same host.
    default_delay: Duration,

    /// Whether rate limiting is disabled (for `--rate-limit 0`).
    disabled: bool,

    /// Per-host time of the last request. `None` means the host has not
    /// been requested yet, so the first request is immediate.
    hosts: DashMap<String, Arc<Mutex<Option<Instant>>>>,
}

impl RateLimiter {
    /// Creates a rate limiter with the given minimum delay between
    /// requests to the same host.
    #[must_use]
    pub fn new(default_delay: Duration) -> Self {
        Self {
            default_delay,
            disabled: false,
            hosts: DashMap::new(),
        }
    }

    /// Creates a disabled rate limiter that applies no delays.
    ///
    /// Use this when `--rate-limit 0` is specified, and in tests.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            default_delay: Duration::ZERO,
            disabled: true,
            hosts: DashMap::new(),
        }
    }

    /// Returns whether rate limiting is disabled.
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Returns the configured delay between requests.
    #[must_use]
    pub fn default_delay(&self) -> Duration {
        self.default_delay
    }

    /// Waits until a request to the URL's host is allowed, then records
    /// the request time.
    ///
    /// The first request to any host proceeds immediately.
    #[instrument(skip(self), fields(host))]
    pub async fn acquire(&self, url: &Url) {
        if self.disabled {
            return;
        }

        let host = host_key(url);
        tracing::Span::current().record("host", host.as_str());

        // Clone the Arc so the DashMap shard lock is released before the
        // await on the inner Mutex.
        let state = self
            .hosts
            .entry(host.clone())
            .or_insert_with(|| Arc::new(Mutex::new(None)))
            .clone();

        let mut last_request = state.lock().await;

        if let Some(last) = *last_request {
            let elapsed = last.elapsed();
            if elapsed < self.default_delay {
                let delay = self.default_delay.saturating_sub(elapsed);
                debug!(host = %host, delay_ms = delay.as_millis(), "applying rate limit delay");
                tokio::time::sleep(delay).await;
            }
        }

        *last_request = Some(Instant::now());
    }
}

/// Normalized host key for rate-limit bookkeeping.
fn host_key(url: &Url) -> String {
    url.host_str().unwrap_or("unknown").to_ascii_lowercase()
}
