//! Tool argument shapes and their conversion into API requests
//!
//! These are what the host sees as each tool's input schema. Conversion also
//! normalizes the loosely-typed inputs some MCP clients send: schemas given
//! as JSON strings and step lists given as a single string.

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

use scrapegraph_client::{
    AgenticScrapperRequest, CrawlOptions, ExtractionMode, MarkdownifyRequest, ScrapeGraphError,
    ScrapeRequest, SearchScraperRequest, SitemapRequest, SmartScraperRequest,
};

/// Arguments for `markdownify`
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct MarkdownifyParams {
    /// Full URL of the page to convert, including http:// or https://
    pub website_url: String,
}

/// Arguments for `smartscraper`
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct SmartScraperParams {
    /// What to extract, in plain language
    pub user_prompt: String,
    /// Page to scrape (exclusive with website_html and website_markdown)
    #[serde(default)]
    pub website_url: Option<String>,
    /// Raw HTML to process instead of fetching a page, up to 2MB
    #[serde(default)]
    pub website_html: Option<String>,
    /// Raw markdown to process instead of fetching a page, up to 2MB
    #[serde(default)]
    pub website_markdown: Option<String>,
    /// JSON schema for the output, as an object or a JSON string
    #[serde(default)]
    pub output_schema: Option<Value>,
    /// Infinite-scroll passes before extraction (0-50)
    #[serde(default)]
    pub number_of_scrolls: Option<u32>,
    /// Pages to follow through pagination (1-100)
    #[serde(default)]
    pub total_pages: Option<u32>,
    /// Render client-side JavaScript first (for SPAs)
    #[serde(default)]
    pub render_heavy_js: Option<bool>,
    /// Use stealth mode against bot detection
    #[serde(default)]
    pub stealth: Option<bool>,
    /// Return the page as markdown without AI extraction
    #[serde(default)]
    pub markdown_only: Option<bool>,
}

/// Arguments for `searchscraper`
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct SearchScraperParams {
    /// Search query or extraction instructions
    pub user_prompt: String,
    /// Number of websites to search (API default is 3)
    #[serde(default)]
    pub num_results: Option<u32>,
    /// Infinite-scroll passes on each website
    #[serde(default)]
    pub number_of_scrolls: Option<u32>,
}

/// Arguments for `scrape`
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ScrapeParams {
    /// Full URL of the page to fetch
    pub website_url: String,
    /// Render client-side JavaScript before returning the HTML
    #[serde(default)]
    pub render_heavy_js: Option<bool>,
}

/// Arguments for `sitemap`
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SitemapParams {
    /// Root URL of the site to map
    pub website_url: String,
}

/// Arguments for `smartcrawler_initiate`
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct SmartCrawlerInitiateParams {
    /// Starting URL for the crawl
    pub url: String,
    /// Extraction prompt, required when extraction_mode is "ai"
    #[serde(default)]
    pub prompt: Option<String>,
    /// "ai" for structured extraction or "markdown" for page conversion
    #[serde(default)]
    pub extraction_mode: Option<String>,
    /// Maximum link depth to follow
    #[serde(default)]
    pub depth: Option<u32>,
    /// Maximum number of pages to visit
    #[serde(default)]
    pub max_pages: Option<u32>,
    /// Stay on the starting domain
    #[serde(default)]
    pub same_domain_only: Option<bool>,
}

/// Arguments for `smartcrawler_fetch_results`
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SmartCrawlerFetchParams {
    /// The request_id returned by smartcrawler_initiate
    pub request_id: String,
}

/// Step list accepted either as an array or as a single string
#[derive(Debug, Clone, PartialEq, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum StepsInput {
    /// Ordered list of steps
    List(Vec<String>),
    /// A JSON array encoded as a string, or one plain-text step
    Text(String),
}

/// Arguments for `agentic_scrapper`
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct AgenticScrapperParams {
    /// Page the workflow starts on
    pub url: String,
    /// Overall goal for the agent
    #[serde(default)]
    pub user_prompt: Option<String>,
    /// JSON schema for the output, as an object or a JSON string
    #[serde(default)]
    pub output_schema: Option<Value>,
    /// Step-by-step instructions, as a list or a JSON array string
    #[serde(default)]
    pub steps: Option<StepsInput>,
    /// Run AI extraction on the final page
    #[serde(default)]
    pub ai_extraction: Option<bool>,
    /// Keep the browser session alive between steps
    #[serde(default)]
    pub persistent_session: Option<bool>,
    /// Time budget for the workflow in seconds
    #[serde(default)]
    pub timeout_seconds: Option<f64>,
}

/// Accept an output schema as an object or JSON string; ensure `required`
pub fn normalize_output_schema(raw: Value) -> Result<Value, ScrapeGraphError> {
    let parsed = match raw {
        Value::String(text) => serde_json::from_str(&text).map_err(|e| {
            ScrapeGraphError::invalid(format!("Invalid JSON for output_schema: {e}"))
        })?,
        other => other,
    };

    let Value::Object(mut schema) = parsed else {
        return Err(ScrapeGraphError::invalid("output_schema must be a JSON object"));
    };
    schema
        .entry("required")
        .or_insert_with(|| Value::Array(Vec::new()));

    Ok(Value::Object(schema))
}

/// Flatten [`StepsInput`] into a list of steps
#[must_use]
pub fn normalize_steps(raw: StepsInput) -> Vec<String> {
    match raw {
        StepsInput::List(steps) => steps,
        StepsInput::Text(text) => match serde_json::from_str::<Vec<String>>(&text) {
            Ok(steps) => steps,
            Err(_) => vec![text],
        },
    }
}

impl From<MarkdownifyParams> for MarkdownifyRequest {
    fn from(params: MarkdownifyParams) -> Self {
        MarkdownifyRequest::new(params.website_url)
    }
}

impl TryFrom<SmartScraperParams> for SmartScraperRequest {
    type Error = ScrapeGraphError;

    fn try_from(params: SmartScraperParams) -> Result<Self, Self::Error> {
        Ok(SmartScraperRequest {
            user_prompt: params.user_prompt,
            website_url: params.website_url,
            website_html: params.website_html,
            website_markdown: params.website_markdown,
            output_schema: params.output_schema.map(normalize_output_schema).transpose()?,
            number_of_scrolls: params.number_of_scrolls,
            total_pages: params.total_pages,
            render_heavy_js: params.render_heavy_js,
            stealth: params.stealth,
            markdown_only: params.markdown_only,
        })
    }
}

impl From<SearchScraperParams> for SearchScraperRequest {
    fn from(params: SearchScraperParams) -> Self {
        SearchScraperRequest {
            user_prompt: params.user_prompt,
            num_results: params.num_results,
            number_of_scrolls: params.number_of_scrolls,
        }
    }
}

impl From<ScrapeParams> for ScrapeRequest {
    fn from(params: ScrapeParams) -> Self {
        ScrapeRequest {
            website_url: params.website_url,
            render_heavy_js: params.render_heavy_js,
        }
    }
}

impl From<SitemapParams> for SitemapRequest {
    fn from(params: SitemapParams) -> Self {
        SitemapRequest::new(params.website_url)
    }
}

impl TryFrom<SmartCrawlerInitiateParams> for CrawlOptions {
    type Error = ScrapeGraphError;

    fn try_from(params: SmartCrawlerInitiateParams) -> Result<Self, Self::Error> {
        let extraction_mode = params
            .extraction_mode
            .as_deref()
            .map(str::parse::<ExtractionMode>)
            .transpose()?;

        Ok(CrawlOptions {
            url: params.url,
            prompt: params.prompt,
            extraction_mode,
            depth: params.depth,
            max_pages: params.max_pages,
            same_domain_only: params.same_domain_only,
        })
    }
}

impl TryFrom<AgenticScrapperParams> for AgenticScrapperRequest {
    type Error = ScrapeGraphError;

    fn try_from(params: AgenticScrapperParams) -> Result<Self, Self::Error> {
        Ok(AgenticScrapperRequest {
            url: params.url,
            user_prompt: params.user_prompt,
            output_schema: params.output_schema.map(normalize_output_schema).transpose()?,
            steps: params.steps.map(normalize_steps),
            ai_extraction: params.ai_extraction,
            persistent_session: params.persistent_session,
            timeout_seconds: params.timeout_seconds,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_schema_object_gets_required() {
        let schema = normalize_output_schema(json!({"type": "object"})).unwrap();
        assert_eq!(schema, json!({"type": "object", "required": []}));
    }

    #[test]
    fn test_schema_existing_required_kept() {
        let schema =
            normalize_output_schema(json!({"type": "object", "required": ["title"]})).unwrap();
        assert_eq!(schema["required"], json!(["title"]));
    }

    #[test]
    fn test_schema_from_json_string() {
        let schema =
            normalize_output_schema(json!(r#"{"properties": {"title": {"type": "string"}}}"#))
                .unwrap();
        assert_eq!(schema["required"], json!([]));
        assert_eq!(schema["properties"]["title"]["type"], "string");
    }

    #[test]
    fn test_schema_bad_string_rejected() {
        let err = normalize_output_schema(json!("{not json")).unwrap_err();
        assert!(err.to_string().starts_with("Invalid JSON for output_schema: "));
    }

    #[test]
    fn test_schema_non_object_rejected() {
        let err = normalize_output_schema(json!("[1, 2]")).unwrap_err();
        assert_eq!(err.to_string(), "output_schema must be a JSON object");
        assert!(normalize_output_schema(json!(42)).is_err());
    }

    #[test]
    fn test_steps_variants() {
        assert_eq!(
            normalize_steps(StepsInput::List(vec!["a".into(), "b".into()])),
            vec!["a", "b"]
        );
        assert_eq!(
            normalize_steps(StepsInput::Text(r#"["click login", "submit"]"#.into())),
            vec!["click login", "submit"]
        );
        assert_eq!(
            normalize_steps(StepsInput::Text("click login".into())),
            vec!["click login"]
        );
    }

    #[test]
    fn test_steps_deserialize_untagged() {
        let params: AgenticScrapperParams =
            serde_json::from_value(json!({"url": "https://x.dev", "steps": ["one"]})).unwrap();
        assert_eq!(params.steps, Some(StepsInput::List(vec!["one".into()])));

        let params: AgenticScrapperParams =
            serde_json::from_value(json!({"url": "https://x.dev", "steps": "one"})).unwrap();
        assert_eq!(params.steps, Some(StepsInput::Text("one".into())));
    }

    #[test]
    fn test_crawl_mode_string_validated() {
        let params = SmartCrawlerInitiateParams {
            url: "https://example.com".into(),
            extraction_mode: Some("pdf".into()),
            ..SmartCrawlerInitiateParams::default()
        };
        let err = CrawlOptions::try_from(params).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid extraction_mode: pdf. Must be 'ai' or 'markdown'"
        );
    }

    #[test]
    fn test_required_only_arguments_deserialize() {
        let params: SmartScraperParams = serde_json::from_value(
            json!({"user_prompt": "titles", "website_url": "https://example.com"}),
        )
        .unwrap();
        let request = SmartScraperRequest::try_from(params).unwrap();
        assert_eq!(
            serde_json::to_value(request).unwrap(),
            json!({"user_prompt": "titles", "website_url": "https://example.com"})
        );
    }
}
