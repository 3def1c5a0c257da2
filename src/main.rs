//! SearXNG MCP Server binary
//!
//! Web, image, and video search via a self-hosted SearXNG instance.
//!
//! # Configuration
//! Set `SEARXNG_URL` env var or point `SEARXNG_MCP_CONFIG` at a TOML file.
//! `MCP_TRANSPORT=http` with `MCP_PORT` serves over the network instead of
//! stdio.

use searxng_mcp::{logging, transport, Config, SearxngMcpServer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Fatal config problems propagate out of main for a non-zero exit
    let config = Config::load()?;
    logging::init_tracing(&config.log_level)?;

    tracing::info!("Starting SearXNG MCP Server");
    tracing::info!("SearXNG URL: {}", config.base_url());
    tracing::info!("Transport: {:?}", config.server.transport);

    let server = SearxngMcpServer::new(&config)?;
    transport::serve(server, &config.server).await?;

    tracing::info!("Server shutting down");
    Ok(())
}
