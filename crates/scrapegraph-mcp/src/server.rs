//! MCP server handler exposing the ScrapeGraph API as tools
//!
//! [`ScrapeGraphServer`] is transport-agnostic: the same handler is served over
//! stdio or behind the streamable HTTP service.

use std::future::Future;
use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    AnnotateAble, CallToolResult, GetPromptRequestParams, GetPromptResult, Implementation,
    ListPromptsResult, ListResourcesResult, PaginatedRequestParams, Prompt, PromptMessage,
    PromptMessageRole, RawResource, ReadResourceRequestParams, ReadResourceResult,
    ResourceContents, ServerCapabilities, ServerInfo,
};
use rmcp::service::RequestContext;
use rmcp::{tool, tool_handler, tool_router, ErrorData, RoleServer, ServerHandler};
use serde_json::Value;
use tracing::debug;

use scrapegraph_client::{
    AgenticScrapperRequest, CrawlOptions, ScrapeGraphClient, ScrapeGraphError,
    SmartScraperRequest,
};

use crate::guides;
use crate::outcome::ToolOutcome;
use crate::params::{
    AgenticScrapperParams, MarkdownifyParams, ScrapeParams, SearchScraperParams, SitemapParams,
    SmartCrawlerFetchParams, SmartCrawlerInitiateParams, SmartScraperParams,
};

const INSTRUCTIONS: &str = "Web scraping tools backed by the ScrapeGraph AI API. \
    Every tool returns the API's JSON response, or an object with an `error` field. \
    smartcrawler_initiate is asynchronous: poll smartcrawler_fetch_results with the \
    returned request_id until status is 'completed'.";

/// MCP handler holding the shared API client
///
/// `client` is `None` when no API key was configured. The tools stay listed
/// and every call answers with the "not initialized" error.
#[derive(Clone)]
pub struct ScrapeGraphServer {
    client: Option<Arc<ScrapeGraphClient>>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl ScrapeGraphServer {
    /// Create a handler around an optional client
    #[must_use]
    pub fn new(client: Option<ScrapeGraphClient>) -> Self {
        Self {
            client: client.map(Arc::new),
            tool_router: Self::tool_router(),
        }
    }

    /// Whether an API client is available
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.client.is_some()
    }

    /// Run `call` against the client, or short-circuit when unconfigured
    async fn run<F, Fut>(&self, tool: &'static str, call: F) -> Result<CallToolResult, ErrorData>
    where
        F: FnOnce(Arc<ScrapeGraphClient>) -> Fut,
        Fut: Future<Output = Result<Value, ScrapeGraphError>>,
    {
        let outcome = match &self.client {
            Some(client) => {
                debug!(tool, "tool call");
                ToolOutcome::from(call(Arc::clone(client)).await)
            }
            None => ToolOutcome::not_initialized(),
        };

        if let ToolOutcome::Failure(message) = &outcome {
            debug!(tool, %message, "tool call failed");
        }
        outcome.into_call_result()
    }

    /// Convert a webpage into markdown
    #[tool(
        description = "Convert a webpage into clean, formatted markdown. Useful for reading \
            articles, documentation and other page content. Costs 2 credits per page.",
        annotations(read_only_hint = true, destructive_hint = false, idempotent_hint = true)
    )]
    pub async fn markdownify(
        &self,
        Parameters(params): Parameters<MarkdownifyParams>,
    ) -> Result<CallToolResult, ErrorData> {
        self.run("markdownify", |client| async move {
            client.markdownify(&params.into()).await
        })
        .await
    }

    /// AI-guided structured extraction
    #[tool(
        description = "Extract structured data from a webpage (or inline HTML/markdown) using AI. \
            Describe what to extract in user_prompt; optionally constrain the result with \
            output_schema. Supports infinite scroll, pagination, JavaScript rendering and stealth \
            mode. Costs 10 credits per page.",
        annotations(read_only_hint = true, destructive_hint = false, idempotent_hint = true)
    )]
    pub async fn smartscraper(
        &self,
        Parameters(params): Parameters<SmartScraperParams>,
    ) -> Result<CallToolResult, ErrorData> {
        self.run("smartscraper", |client| async move {
            let request = SmartScraperRequest::try_from(params)?;
            client.smartscraper(&request).await
        })
        .await
    }

    /// AI-powered web search
    #[tool(
        description = "Search the web and extract structured information from the results using \
            AI. Returns extracted data with reference URLs. Costs 10 credits per website searched \
            (3 websites by default). Results vary over time.",
        annotations(read_only_hint = true, destructive_hint = false, idempotent_hint = false)
    )]
    pub async fn searchscraper(
        &self,
        Parameters(params): Parameters<SearchScraperParams>,
    ) -> Result<CallToolResult, ErrorData> {
        self.run("searchscraper", |client| async move {
            client.searchscraper(&params.into()).await
        })
        .await
    }

    /// Raw page fetch
    #[tool(
        description = "Fetch the raw HTML of a webpage, optionally rendering JavaScript first \
            for single-page applications. No AI processing. Costs 1 credit per page.",
        annotations(read_only_hint = true, destructive_hint = false, idempotent_hint = true)
    )]
    pub async fn scrape(
        &self,
        Parameters(params): Parameters<ScrapeParams>,
    ) -> Result<CallToolResult, ErrorData> {
        self.run("scrape", |client| async move {
            client.scrape(&params.into()).await
        })
        .await
    }

    /// Site URL discovery
    #[tool(
        description = "Discover the URLs that make up a website, starting from its root. Useful \
            before crawling to plan which sections to process. Costs 1 credit per request.",
        annotations(read_only_hint = true, destructive_hint = false, idempotent_hint = true)
    )]
    pub async fn sitemap(
        &self,
        Parameters(params): Parameters<SitemapParams>,
    ) -> Result<CallToolResult, ErrorData> {
        self.run("sitemap", |client| async move {
            client.sitemap(&params.into()).await
        })
        .await
    }

    /// Start an asynchronous crawl
    #[tool(
        description = "Start an asynchronous multi-page crawl from a URL. extraction_mode 'ai' \
            (10 credits/page, requires prompt) extracts structured data from every page; \
            'markdown' (2 credits/page) converts each page to markdown. Returns a request_id: \
            keep calling smartcrawler_fetch_results with it until status is 'completed'.",
        annotations(read_only_hint = false, destructive_hint = false, idempotent_hint = false)
    )]
    pub async fn smartcrawler_initiate(
        &self,
        Parameters(params): Parameters<SmartCrawlerInitiateParams>,
    ) -> Result<CallToolResult, ErrorData> {
        self.run("smartcrawler_initiate", |client| async move {
            let options = CrawlOptions::try_from(params)?;
            client.smartcrawler_initiate(options).await
        })
        .await
    }

    /// Poll a crawl
    #[tool(
        description = "Retrieve the status and, once finished, the results of a crawl started \
            with smartcrawler_initiate. While the crawl runs the status is reported as \
            processing; poll until it is 'completed'.",
        annotations(read_only_hint = true, destructive_hint = false, idempotent_hint = true)
    )]
    pub async fn smartcrawler_fetch_results(
        &self,
        Parameters(params): Parameters<SmartCrawlerFetchParams>,
    ) -> Result<CallToolResult, ErrorData> {
        self.run("smartcrawler_fetch_results", |client| async move {
            client.smartcrawler_fetch_results(&params.request_id).await
        })
        .await
    }

    /// Multi-step agentic workflow
    #[tool(
        description = "Run a multi-step browsing workflow: the agent starts at url, follows the \
            given steps (clicking, typing, navigating) and returns extracted data, optionally \
            shaped by output_schema. Can act on the website. Credit cost depends on workflow \
            complexity.",
        annotations(read_only_hint = false, destructive_hint = false, idempotent_hint = false)
    )]
    pub async fn agentic_scrapper(
        &self,
        Parameters(params): Parameters<AgenticScrapperParams>,
    ) -> Result<CallToolResult, ErrorData> {
        self.run("agentic_scrapper", |client| async move {
            let request = AgenticScrapperRequest::try_from(params)?;
            client.agentic_scrapper(&request).await
        })
        .await
    }
}

#[tool_handler]
impl ServerHandler for ScrapeGraphServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.into()),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .enable_prompts()
                .build(),
            server_info: Implementation {
                name: "scrapegraph-mcp".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                title: Some("ScrapeGraph API MCP Server".into()),
                description: None,
                icons: None,
                website_url: Some("https://scrapegraphai.com".into()),
            },
            ..Default::default()
        }
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, ErrorData> {
        let resources = guides::RESOURCES
            .iter()
            .map(|guide| {
                let mut raw = RawResource::new(guide.uri, guide.name);
                raw.description = Some(guide.description.into());
                raw.mime_type = Some("text/markdown".into());
                raw.no_annotation()
            })
            .collect();
        Ok(ListResourcesResult::with_all_items(resources))
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, ErrorData> {
        let guide = guides::resource(&request.uri).ok_or_else(|| {
            ErrorData::resource_not_found(format!("Unknown resource: {}", request.uri), None)
        })?;
        Ok(ReadResourceResult {
            contents: vec![ResourceContents::text(guide.text, guide.uri)],
        })
    }

    async fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, ErrorData> {
        let prompts = guides::PROMPTS
            .iter()
            .map(|guide| Prompt::new(guide.name, Some(guide.description), None))
            .collect();
        Ok(ListPromptsResult::with_all_items(prompts))
    }

    async fn get_prompt(
        &self,
        request: GetPromptRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, ErrorData> {
        let guide = guides::prompt(&request.name).ok_or_else(|| {
            ErrorData::invalid_params(format!("Unknown prompt: {}", request.name), None)
        })?;
        Ok(GetPromptResult {
            description: Some(guide.description.into()),
            messages: vec![PromptMessage::new_text(PromptMessageRole::User, guide.text)],
        })
    }
}
