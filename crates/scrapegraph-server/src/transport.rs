//! Stdio and streamable HTTP entry points sharing one MCP handler
//! HTTP routes: `/mcp` (MCP streamable HTTP), `GET /health` (liveness).

use std::net::SocketAddr;

use anyhow::{Context, Result};
use axum::{response::IntoResponse, routing::get, Json, Router};
use rmcp::transport::streamable_http_server::session::local::LocalSessionManager;
use rmcp::transport::streamable_http_server::{StreamableHttpServerConfig, StreamableHttpService};
use rmcp::ServiceExt;
use serde_json::json;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info};

use scrapegraph_mcp::ScrapeGraphServer;

/// Serve MCP over stdin/stdout until the host closes the stream
pub async fn serve_stdio(server: ScrapeGraphServer) -> Result<()> {
    let service = server
        .serve(rmcp::transport::stdio())
        .await
        .context("failed to initialize MCP over stdio")?;
    info!("ScrapeGraph MCP server ready on stdio");

    tokio::select! {
        quit = service.waiting() => {
            let reason = quit.context("stdio service task failed")?;
            info!(?reason, "stdio session ended");
        }
        () = shutdown_signal() => {
            info!("Shutting down gracefully...");
        }
    }

    Ok(())
}

/// Serve MCP over streamable HTTP on `addr` until Ctrl+C
pub async fn serve_http(server: ScrapeGraphServer, addr: SocketAddr) -> Result<()> {
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!(%addr, "ScrapeGraph MCP HTTP server ready");

    axum::serve(listener, build_router(server))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    info!("HTTP server stopped");
    Ok(())
}

/// Builds the axum `Router` with the MCP service and liveness probe.
pub fn build_router(server: ScrapeGraphServer) -> Router {
    let mcp = StreamableHttpService::new(
        move || Ok(server.clone()),
        LocalSessionManager::default().into(),
        StreamableHttpServerConfig::default(),
    );

    Router::new()
        .route("/health", get(handle_health))
        .nest_service("/mcp", mcp)
}

async fn handle_health() -> impl IntoResponse {
    Json(json!({"status": "healthy", "service": "scrapegraph-mcp"}))
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        error!("Failed to install Ctrl+C handler: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Received shutdown signal");
}
