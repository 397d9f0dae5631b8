//! HTTP client for catalog page fetching.
//!
//! The client owns the session configuration: identifying headers on every
//! request, a per-attempt timeout, and an automatic retry policy for
//! transient failures (5xx server errors, timeouts, connection drops) with
//! exponential backoff.

use crate::config::Config;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT_LANGUAGE};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Default desktop browser identity, used when no override is configured.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/116.0.0.0 Safari/537.36";

/// Server statuses worth retrying. Anything else non-2xx is terminal.
const RETRYABLE_STATUSES: [u16; 4] = [500, 502, 503, 504];

/// Terminal fetch outcomes, after the retry policy has run its course.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed with status {status}")]
    Status { status: u16 },

    #[error("request timed out")]
    Timeout(#[source] reqwest::Error),

    #[error("network error")]
    Network(#[source] reqwest::Error),

    #[error("failed to build HTTP client")]
    Build(#[source] reqwest::Error),
}

impl FetchError {
    /// Whether the retry policy applies to this failure.
    fn is_transient(&self) -> bool {
        match self {
            FetchError::Status { status } => RETRYABLE_STATUSES.contains(status),
            FetchError::Timeout(_) | FetchError::Network(_) => true,
            FetchError::Build(_) => false,
        }
    }
}

/// Trait for page fetching - enables mocking for tests.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetches a page and returns the response body as text.
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// HTTP client with retry-on-transient-failure semantics.
pub struct CatalogClient {
    client: reqwest::Client,
    retries: u32,
    backoff_secs: f64,
}

impl CatalogClient {
    /// Creates a client from the run configuration.
    ///
    /// Construction performs no I/O; the headers and retry policy are
    /// declarative until the first request.
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        let user_agent = config.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT);

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));

        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(FetchError::Build)?;

        Ok(Self { client, retries: config.retries, backoff_secs: config.backoff_secs })
    }

    /// One GET round-trip, classified into the fetch error taxonomy.
    async fn try_get(&self, url: &str) -> Result<String, FetchError> {
        let response = self.client.get(url).send().await.map_err(classify)?;

        let status = response.status();
        debug!("Response status: {}", status);

        if !status.is_success() {
            return Err(FetchError::Status { status: status.as_u16() });
        }

        response.text().await.map_err(classify)
    }

    /// Backoff before retry `attempt` (0-based): doubles each time.
    fn backoff_delay(&self, attempt: u32) -> Duration {
        Duration::from_secs_f64(self.backoff_secs * f64::from(1u32 << attempt.min(16)))
    }
}

/// Sorts a transport-level failure into timeout vs. general network error.
fn classify(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        FetchError::Timeout(err)
    } else {
        FetchError::Network(err)
    }
}

#[async_trait]
impl PageFetcher for CatalogClient {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        info!("Fetching {}", url);

        let mut attempt = 0;
        loop {
            match self.try_get(url).await {
                Ok(body) => return Ok(body),
                Err(err) if attempt < self.retries && err.is_transient() => {
                    let pause = self.backoff_delay(attempt);
                    attempt += 1;
                    warn!(
                        "Attempt {}/{} failed ({}), retrying in {:.1}s",
                        attempt,
                        self.retries + 1,
                        err,
                        pause.as_secs_f64()
                    );
                    tokio::time::sleep(pause).await;
                }
                Err(err) => return Err(err),
            }
        }
    }
}
