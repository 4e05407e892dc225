//! HTTP client for review pages
//!
//! Requests are sent with a desktop-browser identity. Retry with linear
//! backoff is applied by [`fetch_with_retry`] on top of any [`PageFetcher`],
//! so the same policy covers the real client and test doubles.

use async_trait::async_trait;
use reqwest::header::{
    ACCEPT, ACCEPT_LANGUAGE, HeaderMap, HeaderValue, UPGRADE_INSECURE_REQUESTS,
};
use reqwest::{Client, ClientBuilder};
use std::time::Duration;
use thiserror::Error;
use tokio::time::sleep;
use tracing::{debug, error, info, warn};

use crate::infrastructure::config::HttpConfig;

const BROWSER_ACCEPT: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";
const BROWSER_ACCEPT_LANGUAGE: &str = "en-US,en;q=0.5";

#[derive(Error, Debug, Clone)]
pub enum FetchError {
    #[error("HTTP error {status}: {url}")]
    Status { status: u16, url: String },

    #[error("HTTP request failed for {url}: {message}")]
    Transport { url: String, message: String },

    #[error("Empty response from {url}")]
    EmptyBody { url: String },
}

impl FetchError {
    pub fn transport(url: &str, message: impl Into<String>) -> Self {
        Self::Transport {
            url: url.to_string(),
            message: message.into(),
        }
    }
}

/// Single-attempt page download
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch_page(&self, url: &str) -> Result<String, FetchError>;
}

/// Linear backoff: the wait after failed attempt `n` is `base_delay * n`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_delay: Duration,
}

impl RetryPolicy {
    pub fn from_config(config: &HttpConfig) -> Self {
        Self {
            max_attempts: config.max_retries,
            base_delay: Duration::from_millis(config.request_delay_ms),
        }
    }

    pub fn delay_after_attempt(&self, attempt: u32) -> Duration {
        self.base_delay.saturating_mul(attempt)
    }
}

/// Fetch `url`, retrying any failure up to `policy.max_attempts` times.
/// No wait follows the final attempt.
pub async fn fetch_with_retry(
    fetcher: &dyn PageFetcher,
    url: &str,
    policy: RetryPolicy,
) -> Result<String, FetchError> {
    let max_attempts = policy.max_attempts.max(1);
    let mut last_error = None;

    for attempt in 1..=max_attempts {
        match fetcher.fetch_page(url).await {
            Ok(body) => {
                debug!("Fetched {} on attempt {}", url, attempt);
                return Ok(body);
            }
            Err(e) => {
                warn!("Attempt {}/{} failed for {}: {}", attempt, max_attempts, url, e);
                last_error = Some(e);

                if attempt < max_attempts {
                    sleep(policy.delay_after_attempt(attempt)).await;
                }
            }
        }
    }

    Err(last_error.unwrap_or_else(|| FetchError::transport(url, "no attempt was made")))
}

/// reqwest-backed [`PageFetcher`] carrying browser headers and a cookie jar
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn from_config(config: &HttpConfig) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(BROWSER_ACCEPT));
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static(BROWSER_ACCEPT_LANGUAGE));
        headers.insert(UPGRADE_INSECURE_REQUESTS, HeaderValue::from_static("1"));

        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(&config.user_agent)
            .default_headers(headers)
            .cookie_store(true)
            .gzip(true)
            .brotli(true)
            .redirect(if config.follow_redirects {
                reqwest::redirect::Policy::limited(10)
            } else {
                reqwest::redirect::Policy::none()
            })
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to create HTTP client: {}", e))?;

        info!("🌐 HTTP client ready (timeout {}s)", config.timeout_seconds);
        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpClient {
    async fn fetch_page(&self, url: &str) -> Result<String, FetchError> {
        debug!("🌐 HTTP GET: {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::transport(url, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            error!("❌ HTTP error {}: {}", status, url);
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::transport(url, format!("failed to read body: {e}")))?;

        if body.is_empty() {
            return Err(FetchError::EmptyBody { url: url.to_string() });
        }

        Ok(body)
    }
}
