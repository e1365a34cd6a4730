//! Request bodies for the ScrapeGraph REST endpoints
//!
//! Optional fields the caller leaves unset are omitted from the serialized
//! body entirely; the API never sees an explicit `null`.

use std::str::FromStr;

use serde::Serialize;
use serde_json::Value;

use crate::error::{Result, ScrapeGraphError};

/// Body for `POST /markdownify`
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MarkdownifyRequest {
    /// Page to convert
    pub website_url: String,
}

impl MarkdownifyRequest {
    /// Create a request for a single page
    pub fn new(website_url: impl Into<String>) -> Self {
        Self {
            website_url: website_url.into(),
        }
    }
}

/// Body for `POST /smartscraper`
///
/// Exactly one of `website_url`, `website_html` and `website_markdown` must be
/// set; see [`SmartScraperRequest::validate`].
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct SmartScraperRequest {
    /// Extraction instructions
    pub user_prompt: String,
    /// Remote page to scrape
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website_url: Option<String>,
    /// Inline HTML to process instead of fetching a page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website_html: Option<String>,
    /// Inline markdown to process instead of fetching a page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website_markdown: Option<String>,
    /// JSON schema describing the expected output
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_schema: Option<Value>,
    /// Infinite-scroll passes before extraction
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_scrolls: Option<u32>,
    /// Pagination depth
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_pages: Option<u32>,
    /// Render client-side JavaScript before extraction
    #[serde(skip_serializing_if = "Option::is_none")]
    pub render_heavy_js: Option<bool>,
    /// Stealth mode against bot detection
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stealth: Option<bool>,
    /// Return markdown only, skipping AI extraction
    #[serde(skip_serializing_if = "Option::is_none")]
    pub markdown_only: Option<bool>,
}

impl SmartScraperRequest {
    /// Create a URL-sourced request
    pub fn new(user_prompt: impl Into<String>, website_url: impl Into<String>) -> Self {
        Self {
            user_prompt: user_prompt.into(),
            website_url: Some(website_url.into()),
            ..Self::default()
        }
    }

    /// Check that exactly one input source is set
    ///
    /// # Errors
    /// Returns [`ScrapeGraphError::InvalidArgument`] when no source or more
    /// than one source is given
    pub fn validate(&self) -> Result<()> {
        let sources = [
            self.website_url.is_some(),
            self.website_html.is_some(),
            self.website_markdown.is_some(),
        ]
        .into_iter()
        .filter(|set| *set)
        .count();

        match sources {
            1 => Ok(()),
            0 => Err(ScrapeGraphError::invalid(
                "Must provide one of: website_url, website_html, or website_markdown",
            )),
            _ => Err(ScrapeGraphError::invalid(
                "Provide only one of: website_url, website_html, or website_markdown",
            )),
        }
    }
}

/// Body for `POST /searchscraper`
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct SearchScraperRequest {
    /// Search query or extraction instructions
    pub user_prompt: String,
    /// Number of websites to search
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_results: Option<u32>,
    /// Infinite-scroll passes on each website
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_scrolls: Option<u32>,
}

impl SearchScraperRequest {
    /// Create a search with the API's default breadth
    pub fn new(user_prompt: impl Into<String>) -> Self {
        Self {
            user_prompt: user_prompt.into(),
            ..Self::default()
        }
    }
}

/// Body for `POST /scrape`
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct ScrapeRequest {
    /// Page to fetch
    pub website_url: String,
    /// Render client-side JavaScript before returning
    #[serde(skip_serializing_if = "Option::is_none")]
    pub render_heavy_js: Option<bool>,
}

impl ScrapeRequest {
    /// Create a plain fetch request
    pub fn new(website_url: impl Into<String>) -> Self {
        Self {
            website_url: website_url.into(),
            render_heavy_js: None,
        }
    }
}

/// Body for `POST /sitemap`
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SitemapRequest {
    /// Site root to enumerate
    pub website_url: String,
}

impl SitemapRequest {
    /// Create a sitemap request
    pub fn new(website_url: impl Into<String>) -> Self {
        Self {
            website_url: website_url.into(),
        }
    }
}

/// How SmartCrawler processes each page it visits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionMode {
    /// Structured extraction driven by a prompt
    Ai,
    /// Plain markdown conversion
    Markdown,
}

impl FromStr for ExtractionMode {
    type Err = ScrapeGraphError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "ai" => Ok(Self::Ai),
            "markdown" => Ok(Self::Markdown),
            other => Err(ScrapeGraphError::invalid(format!(
                "Invalid extraction_mode: {other}. Must be 'ai' or 'markdown'"
            ))),
        }
    }
}

/// Caller-facing options for starting a crawl
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CrawlOptions {
    /// Starting URL
    pub url: String,
    /// Extraction prompt
    pub prompt: Option<String>,
    /// Extraction mode; when unset the prompt is forwarded as given
    pub extraction_mode: Option<ExtractionMode>,
    /// Maximum link depth
    pub depth: Option<u32>,
    /// Maximum pages to visit
    pub max_pages: Option<u32>,
    /// Stay on the starting domain
    pub same_domain_only: Option<bool>,
}

impl CrawlOptions {
    /// Crawl from `url` with every other option left to the API
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// Resolve the extraction mode into the wire body
    ///
    /// # Errors
    /// Returns [`ScrapeGraphError::InvalidArgument`] when AI mode is selected
    /// without a prompt
    pub fn into_request(self) -> Result<CrawlRequest> {
        let (prompt, markdown_only) = match self.extraction_mode {
            Some(ExtractionMode::Markdown) => (None, Some(true)),
            Some(ExtractionMode::Ai) => match self.prompt {
                Some(prompt) => (Some(prompt), None),
                None => {
                    return Err(ScrapeGraphError::invalid(
                        "prompt is required when extraction_mode is 'ai'",
                    ))
                }
            },
            None => (self.prompt, None),
        };

        Ok(CrawlRequest {
            url: self.url,
            prompt,
            markdown_only,
            depth: self.depth,
            max_pages: self.max_pages,
            same_domain_only: self.same_domain_only,
        })
    }
}

/// Body for `POST /crawl`
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CrawlRequest {
    /// Starting URL
    pub url: String,
    /// Extraction prompt
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    /// Markdown conversion instead of AI extraction
    #[serde(skip_serializing_if = "Option::is_none")]
    pub markdown_only: Option<bool>,
    /// Maximum link depth
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth: Option<u32>,
    /// Maximum pages to visit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_pages: Option<u32>,
    /// Stay on the starting domain
    #[serde(skip_serializing_if = "Option::is_none")]
    pub same_domain_only: Option<bool>,
}

/// Body for `POST /agentic-scrapper`
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct AgenticScrapperRequest {
    /// Page the workflow starts on
    pub url: String,
    /// Overall goal for the agent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_prompt: Option<String>,
    /// JSON schema describing the expected output
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_schema: Option<Value>,
    /// Ordered instructions for the agent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<String>>,
    /// Enable AI extraction of the final page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_extraction: Option<bool>,
    /// Keep the browser session between steps
    #[serde(skip_serializing_if = "Option::is_none")]
    pub persistent_session: Option<bool>,
    /// Workflow budget, forwarded as a body field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_seconds: Option<f64>,
}

impl AgenticScrapperRequest {
    /// Create a workflow request starting at `url`
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }
}
