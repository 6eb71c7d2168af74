//! Crawler module for page fetching and structural lookups
//!
//! This module contains:
//! - The [`Fetcher`] capability and its HTTP implementation with caching
//! - [`Page`], a parsed document with fail-loudly tag lookups

mod fetcher;
mod parser;

pub use fetcher::{build_http_client, fetch_url, FetchError, Fetcher, HttpFetcher};
pub use parser::{element_text, Direction, Page};

use url::Url;

/// Fetches `url` and parses it, or returns `None` when the fetch failed
pub async fn fetch_page<F: Fetcher>(fetcher: &mut F, url: &Url) -> Option<Page> {
    let body = fetcher.fetch(url).await?;
    Some(Page::parse(url.clone(), &body))
}

#[cfg(test)]
pub(crate) mod testing {
    use super::Fetcher;
    use std::collections::HashMap;
    use url::Url;

    /// In-memory fetcher serving fixed bodies; unknown URLs fail
    #[derive(Default)]
    pub struct StubFetcher {
        pages: HashMap<String, Vec<u8>>,
        pub requested: Vec<String>,
    }

    impl StubFetcher {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_page(mut self, url: &str, body: &str) -> Self {
            self.pages.insert(url.to_string(), body.as_bytes().to_vec());
            self
        }

        pub fn with_bytes(mut self, url: &str, body: &[u8]) -> Self {
            self.pages.insert(url.to_string(), body.to_vec());
            self
        }
    }

    impl Fetcher for StubFetcher {
        async fn fetch_bytes(&mut self, url: &Url) -> Option<Vec<u8>> {
            self.requested.push(url.to_string());
            let body = self.pages.get(url.as_str()).cloned();
            if body.is_none() {
                tracing::error!("Failed to load page {}: not found", url);
            }
            body
        }
    }
}
