//! HTTP client for the ScrapeGraph REST API
//!
//! Provides [`ScrapeGraphClient`], one async method per endpoint. Every call is
//! a single request/response exchange: no retries, no pagination, no caching.

use std::fmt;
use std::time::Duration;

use reqwest::{Response, StatusCode, Url};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{Result, ScrapeGraphError};
use crate::request::{
    AgenticScrapperRequest, CrawlOptions, MarkdownifyRequest, ScrapeRequest, SearchScraperRequest,
    SitemapRequest, SmartScraperRequest,
};

/// Production API root
pub const DEFAULT_BASE_URL: &str = "https://api.scrapegraphai.com/v1";

/// Header carrying the API key on every request
pub const API_KEY_HEADER: &str = "SGAI-APIKEY";

/// Network-layer timeout applied when none is configured
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// Client for the ScrapeGraph API
///
/// Cheap to clone; the inner `reqwest::Client` shares its connection pool.
/// Nothing is mutated after construction, so one instance can serve any
/// number of concurrent calls.
#[derive(Clone)]
pub struct ScrapeGraphClient {
    http: reqwest::Client,
    base_url: Url,
    api_key: String,
}

impl fmt::Debug for ScrapeGraphClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrapeGraphClient")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &"<redacted>")
            .finish_non_exhaustive()
    }
}

impl ScrapeGraphClient {
    /// Create a client against the production API with the default timeout
    ///
    /// # Errors
    /// Returns an error if the TLS backend cannot be initialized
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_options(api_key, DEFAULT_BASE_URL, DEFAULT_TIMEOUT)
    }

    /// Create a client with an explicit base URL and request timeout
    ///
    /// # Errors
    /// Returns an error if the base URL is not an absolute HTTP(S) URL or the
    /// TLS backend cannot be initialized
    pub fn with_options(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let base_url = base_url.into();
        let parsed = Url::parse(base_url.trim_end_matches('/'))
            .map_err(|e| ScrapeGraphError::invalid(format!("invalid base URL {base_url}: {e}")))?;
        if parsed.cannot_be_a_base() {
            return Err(ScrapeGraphError::invalid(format!(
                "invalid base URL {base_url}: cannot carry a path"
            )));
        }
        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            base_url: parsed,
            api_key: api_key.into(),
        })
    }

    /// API root this client talks to
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }

    /// Convert a page to markdown
    ///
    /// # Errors
    /// Fails on transport errors or any non-200 status
    pub async fn markdownify(&self, request: &MarkdownifyRequest) -> Result<Value> {
        self.post(&["markdownify"], request).await
    }

    /// AI-guided extraction from a page or inline content
    ///
    /// # Errors
    /// Fails when the input source is ambiguous or missing, on transport
    /// errors, or on any non-200 status
    pub async fn smartscraper(&self, request: &SmartScraperRequest) -> Result<Value> {
        request.validate()?;
        self.post(&["smartscraper"], request).await
    }

    /// Multi-source web search with extraction
    ///
    /// # Errors
    /// Fails on transport errors or any non-200 status
    pub async fn searchscraper(&self, request: &SearchScraperRequest) -> Result<Value> {
        self.post(&["searchscraper"], request).await
    }

    /// Raw page fetch with optional JavaScript rendering
    ///
    /// # Errors
    /// Fails on transport errors or any non-200 status
    pub async fn scrape(&self, request: &ScrapeRequest) -> Result<Value> {
        self.post(&["scrape"], request).await
    }

    /// Enumerate a site's URLs
    ///
    /// # Errors
    /// Fails on transport errors or any non-200 status
    pub async fn sitemap(&self, request: &SitemapRequest) -> Result<Value> {
        self.post(&["sitemap"], request).await
    }

    /// Start an asynchronous crawl
    ///
    /// Returns immediately with whatever the API answers, normally a
    /// `request_id` for [`Self::smartcrawler_fetch_results`].
    ///
    /// # Errors
    /// Fails when AI mode lacks a prompt, on transport errors, or on any
    /// non-200 status
    pub async fn smartcrawler_initiate(&self, options: CrawlOptions) -> Result<Value> {
        let request = options.into_request()?;
        self.post(&["crawl"], &request).await
    }

    /// Poll a crawl started by [`Self::smartcrawler_initiate`]
    ///
    /// The id is sent as a single percent-encoded path segment, so `/`, `?`,
    /// `#` or `..` inside it never select another endpoint.
    ///
    /// # Errors
    /// Fails on transport errors or any non-200 status
    pub async fn smartcrawler_fetch_results(&self, request_id: &str) -> Result<Value> {
        self.get(&["crawl", request_id]).await
    }

    /// Run a multi-step agentic workflow
    ///
    /// # Errors
    /// Fails on transport errors or any non-200 status
    pub async fn agentic_scrapper(&self, request: &AgenticScrapperRequest) -> Result<Value> {
        self.post(&["agentic-scrapper"], request).await
    }

    /// Append `segments` to the base URL, each one percent-encoded
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // cannot_be_a_base URLs are rejected at construction
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn post<B: Serialize + ?Sized>(&self, segments: &[&str], body: &B) -> Result<Value> {
        let url = self.endpoint(segments);
        debug!(%url, "POST");

        let response = self
            .http
            .post(url.clone())
            .header(API_KEY_HEADER, &self.api_key)
            .json(body)
            .send()
            .await?;

        Self::into_json(url.path(), response).await
    }

    async fn get(&self, segments: &[&str]) -> Result<Value> {
        let url = self.endpoint(segments);
        debug!(%url, "GET");

        let response = self
            .http
            .get(url.clone())
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await?;

        Self::into_json(url.path(), response).await
    }

    /// Unwrap a response: 200 yields the parsed body, anything else the raw text
    async fn into_json(path: &str, response: Response) -> Result<Value> {
        let status = response.status();
        let body = response.text().await?;

        if status != StatusCode::OK {
            warn!(endpoint = path, status = status.as_u16(), "ScrapeGraph API error");
            return Err(ScrapeGraphError::Api {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|source| ScrapeGraphError::Decode {
            status: status.as_u16(),
            source,
        })
    }
}
