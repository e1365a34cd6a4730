use crate::config::{Config, Transport};
use crate::transport;
use anyhow::Result;
use scrapegraph_client::ScrapeGraphClient;
use scrapegraph_mcp::ScrapeGraphServer;

use tracing::{info, warn};

/// MCP service - builds the shared client and runs the selected transport
pub struct ScrapeGraphService {
    config: Config,
}

impl ScrapeGraphService {
    /// Create a new service
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Build the API client, or `None` when no key is configured
    ///
    /// A missing key is not fatal: the server still starts so the tools stay
    /// discoverable, and every call reports the missing key.
    fn build_client(&self) -> Result<Option<ScrapeGraphClient>> {
        let Some(key) = self.config.api.key() else {
            warn!("SGAI_API_KEY is not set; starting in degraded mode");
            return Ok(None);
        };

        let client = ScrapeGraphClient::with_options(
            key,
            &self.config.api.base_url,
            self.config.api.timeout(),
        )?;
        info!(base_url = client.base_url(), "ScrapeGraph client initialized");
        Ok(Some(client))
    }

    /// Run the service until the transport closes or a shutdown signal arrives
    pub async fn run(self) -> Result<()> {
        // Initialize logging
        scrapegraph_logging::init_logging(&self.config.logging.level)?;
        info!(
            "Starting ScrapeGraph MCP server v{} (transport: {})",
            env!("CARGO_PKG_VERSION"),
            self.config.server.transport
        );

        let server = ScrapeGraphServer::new(self.build_client()?);

        match self.config.server.transport {
            Transport::Stdio => transport::serve_stdio(server).await?,
            Transport::Http => {
                let addr = self.config.server.bind_addr()?;
                transport::serve_http(server, addr).await?;
            }
        }

        info!("ScrapeGraph MCP server stopped");
        Ok(())
    }
}
