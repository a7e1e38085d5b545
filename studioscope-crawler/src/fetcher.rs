use crate::error::Result;
use crate::limiter::RateLimiter;
use crate::outcome::FetchOutcome;
use reqwest::Client;
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, HeaderMap, HeaderValue};
use std::time::Duration;
use tracing::{debug, warn};

const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/119.0 Safari/537.36";
const REQUEST_TIMEOUT_SECS: u64 = 20;

/// Performs exactly one GET per call, behind the politeness limiter.
/// Redirects are followed; the post-redirect URL is reported separately so
/// callers can scope link discovery to the host actually served.
pub struct Fetcher {
    client: Client,
    limiter: RateLimiter,
}

impl Fetcher {
    pub fn new(limiter: RateLimiter) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static(
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
            ),
        );
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .connect_timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS / 2))
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()?;

        Ok(Self { client, limiter })
    }

    /// One GET, no retries. Network-level failure (timeout, DNS, connect,
    /// TLS) yields an outcome with absent body and status.
    pub async fn fetch(&mut self, url: &str) -> FetchOutcome {
        self.limiter.wait(url).await;
        debug!("GET {}", url);

        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("request to {} failed: {}", url, e);
                return FetchOutcome::failed(url.to_string());
            }
        };

        let resolved_url = response.url().to_string();
        let http_status = response.status().as_u16();

        let bytes = match response.bytes().await {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!("reading body of {} failed: {}", url, e);
                return FetchOutcome::failed(url.to_string());
            }
        };

        FetchOutcome {
            requested_url: url.to_string(),
            resolved_url: Some(resolved_url),
            http_status: Some(http_status),
            body: Some(String::from_utf8_lossy(&bytes).into_owned()),
            byte_size: bytes.len(),
        }
    }
}
