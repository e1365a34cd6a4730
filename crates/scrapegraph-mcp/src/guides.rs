//! Static reference documents served as MCP resources and prompts

/// A read-only markdown document addressed by URI
#[derive(Debug, Clone, Copy)]
pub struct GuideResource {
    /// `scrapegraph://` URI the host reads
    pub uri: &'static str,
    /// Short display name
    pub name: &'static str,
    /// One-line summary shown in resource listings
    pub description: &'static str,
    /// Markdown body
    pub text: &'static str,
}

/// A canned prompt without arguments
#[derive(Debug, Clone, Copy)]
pub struct GuidePrompt {
    /// Prompt name
    pub name: &'static str,
    /// One-line summary shown in prompt listings
    pub description: &'static str,
    /// Prompt text delivered as a single user message
    pub text: &'static str,
}

/// All resources, in listing order
pub const RESOURCES: &[GuideResource] = &[
    GuideResource {
        uri: "scrapegraph://api/status",
        name: "api_status",
        description: "Available tools, credit costs and API endpoint",
        text: API_STATUS,
    },
    GuideResource {
        uri: "scrapegraph://examples/use-cases",
        name: "use_cases",
        description: "Common scraping scenarios and the tool suited to each",
        text: USE_CASES,
    },
    GuideResource {
        uri: "scrapegraph://parameters/reference",
        name: "parameter_reference",
        description: "Every tool parameter with accepted values and defaults",
        text: PARAMETER_REFERENCE,
    },
    GuideResource {
        uri: "scrapegraph://tools/comparison",
        name: "tool_comparison",
        description: "Side-by-side comparison of cost, speed and output",
        text: TOOL_COMPARISON,
    },
];

/// All prompts, in listing order
pub const PROMPTS: &[GuidePrompt] = &[
    GuidePrompt {
        name: "web_scraping_guide",
        description: "How to pick and combine the ScrapeGraph tools",
        text: WEB_SCRAPING_GUIDE,
    },
    GuidePrompt {
        name: "quick_start_examples",
        description: "Ready-to-use requests for each tool",
        text: QUICK_START,
    },
];

/// Look up a resource by URI
#[must_use]
pub fn resource(uri: &str) -> Option<&'static GuideResource> {
    RESOURCES.iter().find(|r| r.uri == uri)
}

/// Look up a prompt by name
#[must_use]
pub fn prompt(name: &str) -> Option<&'static GuidePrompt> {
    PROMPTS.iter().find(|p| p.name == name)
}

const API_STATUS: &str = r"# ScrapeGraph MCP Server

Endpoint: https://api.scrapegraphai.com/v1

## Tools

| Tool | Credits |
|------|---------|
| markdownify | 2 per page |
| smartscraper | 10 per page |
| searchscraper | 10 per website searched (3 by default) |
| scrape | 1 per page |
| sitemap | 1 per request |
| smartcrawler_initiate | 10 per page (ai) or 2 per page (markdown) |
| smartcrawler_fetch_results | free |
| agentic_scrapper | varies with workflow length |

Every tool returns the API's JSON body on success, or an object with a single
`error` field describing what went wrong.
";

const USE_CASES: &str = r#"# Common Use Cases

## Read an article or documentation page
Use `markdownify` with the page URL. Output is clean markdown.

## Pull structured data out of one page
Use `smartscraper` with a `user_prompt` such as "list every product name and
price". Add `output_schema` when the shape of the result matters, and
`render_heavy_js: true` for single-page applications.

## Research a topic across the web
Use `searchscraper` with a question. Raise `num_results` for broader coverage.

## Map a site before crawling it
Call `sitemap` on the root URL, then pick sections to crawl.

## Process many pages of one site
1. `smartcrawler_initiate` with `url`, `extraction_mode` ("ai" needs a
   `prompt`, "markdown" does not) and `max_pages`.
2. Poll `smartcrawler_fetch_results` with the returned `request_id` until
   `status` is "completed".

## Walk through a multi-step flow
Use `agentic_scrapper` with `steps`, e.g.
`["open the search page", "search for laptops", "open the first result"]`.
"#;

const PARAMETER_REFERENCE: &str = r#"# Parameter Reference

All URLs must include the protocol (http:// or https://). Parameters left out
of a call are not sent to the API; the API's own defaults apply.

## markdownify
- `website_url` (string, required)

## smartscraper
- `user_prompt` (string, required)
- `website_url` | `website_html` | `website_markdown` (exactly one)
- `output_schema` (object or JSON string; `required` is added as `[]` if missing)
- `number_of_scrolls` (0-50), `total_pages` (1-100)
- `render_heavy_js`, `stealth`, `markdown_only` (booleans)

## searchscraper
- `user_prompt` (string, required)
- `num_results` (integer, default 3), `number_of_scrolls` (integer)

## scrape
- `website_url` (string, required)
- `render_heavy_js` (boolean)

## sitemap
- `website_url` (string, required)

## smartcrawler_initiate
- `url` (string, required)
- `extraction_mode` ("ai" or "markdown")
- `prompt` (string, required when extraction_mode is "ai")
- `depth`, `max_pages` (integers), `same_domain_only` (boolean)

## smartcrawler_fetch_results
- `request_id` (string, required, as returned by smartcrawler_initiate)

## agentic_scrapper
- `url` (string, required)
- `user_prompt` (string)
- `output_schema` (object or JSON string)
- `steps` (array of strings, JSON array string, or a single step)
- `ai_extraction`, `persistent_session` (booleans)
- `timeout_seconds` (number)
"#;

const TOOL_COMPARISON: &str = r"# Tool Comparison

| Tool | Input | Output | Speed | Credits |
|------|-------|--------|-------|---------|
| scrape | 1 URL | raw HTML | fast | 1 |
| sitemap | site root | URL list | fast | 1 |
| markdownify | 1 URL | markdown | fast | 2 |
| smartscraper | 1 URL or inline content | structured JSON | medium | 10/page |
| searchscraper | question | structured JSON + sources | slow | 10/site |
| smartcrawler | start URL | per-page JSON or markdown | async | 2-10/page |
| agentic_scrapper | start URL + steps | structured JSON | slow | varies |

Prefer the cheapest tool that produces the output you need: `markdownify` for
reading, `smartscraper` for extraction, the crawler only when many pages are
involved.
";

const WEB_SCRAPING_GUIDE: &str = r"You have access to the ScrapeGraph web scraping tools.

Choose a tool by the job:
- Reading one page: markdownify.
- Extracting specific fields from one page: smartscraper with a precise user_prompt.
- Answering a question from several sources: searchscraper.
- Raw HTML for custom parsing: scrape.
- Discovering a site's pages: sitemap.
- Many pages of one site: smartcrawler_initiate, then poll smartcrawler_fetch_results
  with the request_id until status is completed.
- Interactive multi-step flows: agentic_scrapper with explicit steps.

Every tool returns either the API's JSON or an object with an `error` field. Check for
`error` before using a result. Errors of the form `Error 401: ...` mean the API key is
invalid, `Error 402: ...` means credits are exhausted, and `Error 429: ...` means requests
should be slowed down.
";

const QUICK_START: &str = r#"Quick start requests for the ScrapeGraph tools:

markdownify {"website_url": "https://docs.python.org/3/tutorial/"}

smartscraper {"user_prompt": "Extract every product name and price", "website_url": "https://shop.example.com"}

searchscraper {"user_prompt": "Latest stable Rust release and its headline features", "num_results": 3}

scrape {"website_url": "https://example.com", "render_heavy_js": true}

sitemap {"website_url": "https://example.com"}

smartcrawler_initiate {"url": "https://docs.example.com", "extraction_mode": "markdown", "max_pages": 20}

smartcrawler_fetch_results {"request_id": "<request_id from smartcrawler_initiate>"}

agentic_scrapper {"url": "https://example.com/search", "steps": ["type laptop in the search box", "press enter"], "user_prompt": "Return the first five results"}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        assert!(resource("scrapegraph://api/status").is_some());
        assert!(resource("scrapegraph://missing").is_none());
        assert!(prompt("quick_start_examples").is_some());
        assert!(prompt("nope").is_none());
    }

    #[test]
    fn test_uris_share_scheme() {
        for r in RESOURCES {
            assert!(r.uri.starts_with("scrapegraph://"), "{}", r.uri);
            assert!(!r.text.is_empty());
        }
    }
}
