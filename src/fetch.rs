//! Page fetching.
//!
//! The [`Fetcher`] trait is the seam between the resolution logic and the
//! HTTP transport: clients ask for a parsed [`Page`] by URL and language,
//! and tests substitute an in-memory implementation. [`HttpFetcher`] is
//! the production implementation on top of a blocking reqwest client.

use std::sync::LazyLock;
use std::time::Duration;

use reqwest::blocking::Client;
use url::Url;

use crate::error::ResolutionError;
use crate::page::Page;

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Shared HTTP client for all requests (connection pooling).
static SHARED_CLIENT: LazyLock<Client> = LazyLock::new(|| {
    Client::builder()
        .user_agent(USER_AGENT)
        .connect_timeout(Duration::from_secs(10))
        .timeout(Duration::from_secs(30))
        .build()
        .expect("failed to build shared HTTP client")
});

/// Fetches catalog pages as parsed documents.
///
/// Implementations must send an `Accept-Language` header carrying the
/// requested `language`. A `post` body of `None` means GET; `Some` means
/// a form POST with the given key/value pairs.
pub trait Fetcher {
    /// Fetches `url` and parses the response body into a [`Page`].
    fn fetch(
        &self,
        url: &str,
        language: &str,
        post: Option<&[(&str, &str)]>,
    ) -> Result<Page, ResolutionError>;
}

/// Production fetcher backed by a blocking reqwest client.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Creates a new fetcher (reuses the shared connection pool).
    pub fn new() -> Self {
        Self {
            client: SHARED_CLIENT.clone(),
        }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(
        &self,
        url: &str,
        language: &str,
        post: Option<&[(&str, &str)]>,
    ) -> Result<Page, ResolutionError> {
        // Validate up front so a missing scheme surfaces as a clean
        // resolution error instead of a transport-specific one.
        let parsed = Url::parse(url).map_err(|e| ResolutionError::Fetch {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        let request = match post {
            Some(form) => self.client.post(parsed).form(form),
            None => self.client.get(parsed),
        };

        let response = request
            .header("Accept-Language", language)
            .send()
            .map_err(|e| ResolutionError::Fetch {
                url: url.to_string(),
                reason: e.to_string(),
            })?;

        let body = response.text().map_err(|e| ResolutionError::Fetch {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Page::parse(&body))
    }
}
