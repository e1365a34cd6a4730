mod config;
mod service;
mod transport;

use anyhow::Result;
use config::Config;
use service::ScrapeGraphService;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = Config::load()?;

    // Create and run the MCP service
    let service = ScrapeGraphService::new(config);
    service.run().await
}
