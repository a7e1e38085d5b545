use crate::error::{CrawlError, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;
use std::time::Duration;
use tokio::time::Instant;
use tracing::debug;
use url::Url;

pub const DEFAULT_MIN_DELAY: Duration = Duration::from_millis(1000);
pub const DEFAULT_MAX_DELAY: Duration = Duration::from_millis(2000);

/// Enforces a randomized minimum spacing between consecutive requests to
/// the same host. The jitter avoids a mechanically detectable cadence.
///
/// Single-owner state: `wait` takes `&mut self`, so the read-then-write on
/// the host map is safe as long as fetches run sequentially. A concurrent
/// caller would need to serialize per host.
pub struct RateLimiter {
    last_hit: HashMap<String, Instant>,
    min_delay: Duration,
    max_delay: Duration,
    rng: StdRng,
}

impl RateLimiter {
    pub fn new(min_delay: Duration, max_delay: Duration) -> Result<Self> {
        if min_delay > max_delay {
            return Err(CrawlError::InvalidDelayWindow {
                min: min_delay,
                max: max_delay,
            });
        }
        Ok(Self {
            last_hit: HashMap::new(),
            min_delay,
            max_delay,
            rng: StdRng::from_entropy(),
        })
    }

    /// Replace the jitter source with a seeded one. Timing tests use this
    /// to make the drawn delay deterministic.
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    /// Sleep until the politeness window for the URL's host has passed,
    /// then stamp the host with the current time. First contact with a
    /// host returns immediately. URLs without an extractable host are not
    /// throttled.
    pub async fn wait(&mut self, url: &str) {
        let Some(host) = host_of(url) else {
            return;
        };
        if let Some(&last) = self.last_hit.get(&host) {
            let delay = self.draw_delay();
            let ready = last + delay;
            let now = Instant::now();
            if ready > now {
                debug!("throttling {} for {:?}", host, ready - now);
                tokio::time::sleep_until(ready).await;
            }
        }
        self.last_hit.insert(host, Instant::now());
    }

    fn draw_delay(&mut self) -> Duration {
        let min = self.min_delay.as_secs_f64();
        let max = self.max_delay.as_secs_f64();
        Duration::from_secs_f64(self.rng.gen_range(min..=max))
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_DELAY, DEFAULT_MAX_DELAY)
            .expect("default politeness window is valid")
    }
}

fn host_of(url: &str) -> Option<String> {
    Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(|h| h.to_string()))
}
