//! Request/response contract of every endpoint against a stubbed API

use std::time::Duration;

use scrapegraph_client::{
    AgenticScrapperRequest, CrawlOptions, ExtractionMode, MarkdownifyRequest, ScrapeGraphClient,
    ScrapeGraphError, ScrapeRequest, SearchScraperRequest, SitemapRequest, SmartScraperRequest,
    API_KEY_HEADER,
};
use serde_json::{json, Value};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const KEY: &str = "sgai-test-key";

fn client_for(server: &MockServer) -> ScrapeGraphClient {
    ScrapeGraphClient::with_options(KEY, server.uri(), Duration::from_secs(5))
        .expect("client builds")
}

async fn last_body(server: &MockServer) -> Value {
    let requests = server.received_requests().await.expect("recording enabled");
    let last = requests.last().expect("at least one request");
    serde_json::from_slice(&last.body).expect("json body")
}

#[tokio::test]
async fn test_markdownify_sends_key_and_returns_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/markdownify"))
        .and(header(API_KEY_HEADER, KEY))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"website_url": "https://example.com"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"x": 1})))
        .expect(1)
        .mount(&server)
        .await;

    let result = client_for(&server)
        .markdownify(&MarkdownifyRequest::new("https://example.com"))
        .await
        .expect("success");
    assert_eq!(result, json!({"x": 1}));
}

#[tokio::test]
async fn test_non_200_carries_status_and_raw_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/sitemap"))
        .respond_with(ResponseTemplate::new(402).set_body_string("payment required"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .sitemap(&SitemapRequest::new("https://example.com"))
        .await
        .expect_err("402 must fail");

    match &err {
        ScrapeGraphError::Api { status, body } => {
            assert_eq!(*status, 402);
            assert_eq!(body, "payment required");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
    assert_eq!(err.to_string(), "Error 402: payment required");
}

#[tokio::test]
async fn test_other_2xx_is_still_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/scrape"))
        .respond_with(ResponseTemplate::new(202).set_body_string("queued"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .scrape(&ScrapeRequest::new("https://example.com"))
        .await
        .expect_err("only 200 is success");
    assert_eq!(err.to_string(), "Error 202: queued");
}

#[tokio::test]
async fn test_non_json_success_body_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/markdownify"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .markdownify(&MarkdownifyRequest::new("https://example.com"))
        .await
        .expect_err("html is not json");
    assert!(matches!(err, ScrapeGraphError::Decode { status: 200, .. }));
}

#[tokio::test]
async fn test_smartscraper_forwards_only_set_fields() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/smartscraper"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": []})))
        .mount(&server)
        .await;

    let request = SmartScraperRequest {
        number_of_scrolls: Some(3),
        stealth: Some(true),
        ..SmartScraperRequest::new("list products", "https://shop.example.com")
    };
    client_for(&server)
        .smartscraper(&request)
        .await
        .expect("success");

    assert_eq!(
        last_body(&server).await,
        json!({
            "user_prompt": "list products",
            "website_url": "https://shop.example.com",
            "number_of_scrolls": 3,
            "stealth": true
        })
    );
}

#[tokio::test]
async fn test_smartscraper_without_source_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let request = SmartScraperRequest {
        user_prompt: "anything".into(),
        ..SmartScraperRequest::default()
    };
    let err = client_for(&server)
        .smartscraper(&request)
        .await
        .expect_err("no source");
    assert!(matches!(err, ScrapeGraphError::InvalidArgument(_)));
}

#[tokio::test]
async fn test_searchscraper_optional_counts() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/searchscraper"))
        .and(body_json(json!({"user_prompt": "rust web frameworks", "num_results": 5})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"reference_urls": []})))
        .expect(1)
        .mount(&server)
        .await;

    let request = SearchScraperRequest {
        num_results: Some(5),
        ..SearchScraperRequest::new("rust web frameworks")
    };
    client_for(&server)
        .searchscraper(&request)
        .await
        .expect("success");
}

#[tokio::test]
async fn test_crawl_initiate_then_fetch_forwards_id_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/crawl"))
        .and(body_json(json!({"url": "https://example.com", "markdown_only": true})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"request_id": "abc123"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/crawl/abc123"))
        .and(header(API_KEY_HEADER, KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            json!({"status": "completed", "result": {"pages": 2}}),
        ))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let options = CrawlOptions {
        extraction_mode: Some(ExtractionMode::Markdown),
        ..CrawlOptions::new("https://example.com")
    };
    let started = client.smartcrawler_initiate(options).await.expect("initiate");
    assert_eq!(started, json!({"request_id": "abc123"}));

    let request_id = started["request_id"].as_str().expect("id");
    let polled = client
        .smartcrawler_fetch_results(request_id)
        .await
        .expect("fetch");
    assert_eq!(polled, json!({"status": "completed", "result": {"pages": 2}}));
}

#[tokio::test]
async fn test_fetch_results_id_stays_inside_crawl_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "processing"})))
        .expect(4)
        .mount(&server)
        .await;

    let client = ScrapeGraphClient::with_options(
        KEY,
        format!("{}/v1", server.uri()),
        Duration::from_secs(5),
    )
    .expect("client builds");

    let cases = [
        ("../sitemap", "/v1/crawl/..%2Fsitemap"),
        ("a/b?x=1", "/v1/crawl/a%2Fb%3Fx=1"),
        ("abc#frag", "/v1/crawl/abc%23frag"),
        ("abc123", "/v1/crawl/abc123"),
    ];
    for (id, _) in cases {
        client
            .smartcrawler_fetch_results(id)
            .await
            .unwrap_or_else(|e| panic!("fetch {id}: {e}"));
    }

    let received = server.received_requests().await.expect("recording enabled");
    assert_eq!(received.len(), cases.len());
    for (request, (id, expected)) in received.iter().zip(cases) {
        assert_eq!(request.url.path(), expected, "{id}");
        assert!(request.url.query().is_none(), "{id}");
        assert_eq!(
            request.headers.get(API_KEY_HEADER).map(|v| v.as_bytes()),
            Some(KEY.as_bytes()),
            "{id}"
        );
    }
}

#[tokio::test]
async fn test_agentic_timeout_is_a_body_field() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/agentic-scrapper"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
        .mount(&server)
        .await;

    let request = AgenticScrapperRequest {
        steps: Some(vec!["open search".into(), "type laptop".into()]),
        timeout_seconds: Some(30.0),
        ..AgenticScrapperRequest::new("https://example.com")
    };
    client_for(&server)
        .agentic_scrapper(&request)
        .await
        .expect("success");

    assert_eq!(
        last_body(&server).await,
        json!({
            "url": "https://example.com",
            "steps": ["open search", "type laptop"],
            "timeout_seconds": 30.0
        })
    );
}

#[tokio::test]
async fn test_unreachable_api_is_http_error() {
    let client = ScrapeGraphClient::with_options(KEY, "http://127.0.0.1:9", Duration::from_secs(2))
        .expect("client builds");
    let err = client
        .markdownify(&MarkdownifyRequest::new("https://example.com"))
        .await
        .expect_err("nothing listens on port 9");
    assert!(matches!(err, ScrapeGraphError::Http(_)));
}
