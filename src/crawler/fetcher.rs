//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests, including:
//! - Building HTTP clients with proper user agent strings
//! - Serving responses from the cross-request cache
//! - Classifying and logging transport failures
//!
//! A failed fetch is never an error for the caller: it is logged with the
//! offending URL and reported as an absent body, and the caller skips that
//! unit of work.

use crate::config::{Config, HttpConfig, UserAgentConfig};
use crate::storage::ResponseCache;
use crate::CensusError;
use reqwest::{redirect::Policy, Client};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Source of page bodies
///
/// The status crawler and the documentation modes only depend on this
/// capability, so they can be driven by [`HttpFetcher`] or by an in-memory
/// fixture.
#[allow(async_fn_in_trait)]
pub trait Fetcher {
    /// Fetches the raw body of `url`, or `None` after logging the failure
    async fn fetch_bytes(&mut self, url: &Url) -> Option<Vec<u8>>;

    /// Fetches `url` as UTF-8 text, or `None` after logging the failure
    async fn fetch(&mut self, url: &Url) -> Option<String> {
        let bytes = self.fetch_bytes(url).await?;
        match String::from_utf8(bytes) {
            Ok(body) => Some(body),
            Err(e) => {
                tracing::error!("Failed to decode response from {}: {}", url, e);
                None
            }
        }
    }
}

/// Classified transport failure
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request timed out")]
    Timeout,

    #[error("connection failed: {0}")]
    Connect(String),

    #[error("HTTP status {0}")]
    HttpStatus(u16),

    #[error("failed to read body: {0}")]
    Body(String),

    #[error("request failed: {0}")]
    Request(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout
        } else if e.is_connect() {
            Self::Connect(e.to_string())
        } else if e.is_body() || e.is_decode() {
            Self::Body(e.to_string())
        } else {
            Self::Request(e.to_string())
        }
    }
}

/// Builds an HTTP client with proper configuration
///
/// # Example
///
/// ```no_run
/// use doc_census::config::{HttpConfig, UserAgentConfig};
/// use doc_census::crawler::build_http_client;
///
/// let client = build_http_client(&UserAgentConfig::default(), &HttpConfig::default()).unwrap();
/// ```
pub fn build_http_client(
    user_agent: &UserAgentConfig,
    http: &HttpConfig,
) -> Result<Client, reqwest::Error> {
    // Format: CrawlerName/Version
    let user_agent = format!("{}/{}", user_agent.crawler_name, user_agent.crawler_version);

    Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(http.timeout_secs))
        .connect_timeout(Duration::from_secs(http.connect_timeout_secs))
        .redirect(Policy::limited(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Sends a single GET request and returns the status code and body
///
/// Any non-success status is a failure; error pages are never handed to
/// the parsers.
pub async fn fetch_url(client: &Client, url: &Url) -> Result<(u16, Vec<u8>), FetchError> {
    let response = client.get(url.clone()).send().await?;
    let status = response.status();

    if !status.is_success() {
        return Err(FetchError::HttpStatus(status.as_u16()));
    }

    let body = response.bytes().await?;
    Ok((status.as_u16(), body.to_vec()))
}

/// Fetcher backed by a reqwest client and an optional response cache
pub struct HttpFetcher {
    client: Client,
    cache: Option<ResponseCache>,
}

impl HttpFetcher {
    /// Creates a fetcher from an already built client
    pub fn new(client: Client, cache: Option<ResponseCache>) -> Self {
        Self { client, cache }
    }

    /// Builds the client and opens the cache described by `config`
    ///
    /// With `clear_cache` set, every previously cached response is dropped
    /// before the first request.
    pub fn from_config(config: &Config, clear_cache: bool) -> Result<Self, CensusError> {
        let client = build_http_client(&config.user_agent, &config.http)?;

        let cache = if config.cache.enabled {
            let cache = ResponseCache::open(Path::new(&config.cache.database_path))?;
            if clear_cache {
                let removed = cache.clear()?;
                tracing::info!("Cleared {} cached responses", removed);
            }
            Some(cache)
        } else {
            if clear_cache {
                tracing::warn!("--clear-cache has no effect: the response cache is disabled");
            }
            None
        };

        Ok(Self::new(client, cache))
    }

    /// The response cache, when enabled
    pub fn cache(&self) -> Option<&ResponseCache> {
        self.cache.as_ref()
    }

    fn cached(&self, url: &Url) -> Option<Vec<u8>> {
        let cache = self.cache.as_ref()?;
        match cache.get(url.as_str()) {
            Ok(Some(response)) => {
                tracing::debug!("Cache hit: {} (stored {})", url, response.fetched_at);
                Some(response.body)
            }
            Ok(None) => None,
            Err(e) => {
                tracing::warn!("Cache lookup failed for {}: {}", url, e);
                None
            }
        }
    }
}

impl Fetcher for HttpFetcher {
    async fn fetch_bytes(&mut self, url: &Url) -> Option<Vec<u8>> {
        if let Some(body) = self.cached(url) {
            return Some(body);
        }

        tracing::debug!("GET {}", url);
        match fetch_url(&self.client, url).await {
            Ok((status_code, body)) => {
                if let Some(cache) = &self.cache {
                    if let Err(e) = cache.put(url.as_str(), status_code, &body) {
                        tracing::warn!("Failed to cache response for {}: {}", url, e);
                    }
                }
                Some(body)
            }
            Err(e) => {
                tracing::error!("Failed to load page {}: {}", url, e);
                None
            }
        }
    }
}
