//! ScrapeGraph API client
//!
//! Typed async client for the ScrapeGraph AI REST API.
//!
//! ## Features
//!
//! - One method per endpoint: markdownify, smartscraper, searchscraper,
//!   scrape, sitemap, crawl initiate/fetch and the agentic scrapper
//! - `200 OK` bodies are returned as untouched JSON
//! - Any other status becomes [`ScrapeGraphError::Api`] carrying the status
//!   and raw body
//! - Unset optional arguments never reach the wire

#![deny(unsafe_code, dead_code, unused_imports, unused_variables, missing_docs)]

pub mod client;
pub mod error;
pub mod request;

pub use client::{ScrapeGraphClient, API_KEY_HEADER, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use error::{Result, ScrapeGraphError};
pub use request::{
    AgenticScrapperRequest, CrawlOptions, CrawlRequest, ExtractionMode, MarkdownifyRequest,
    ScrapeRequest, SearchScraperRequest, SitemapRequest, SmartScraperRequest,
};
