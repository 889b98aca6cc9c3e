//! RIMS MCP Server Entry Point
//!
//! Initializes logging, loads configuration, and serves the tool catalog on
//! stdin/stdout. Missing RIMS configuration aborts start-up.

use anyhow::Result;
use tracing::info;

use rims_mcp_server::core::{Config, McpServer, StdioTransport, config::LoggingConfig, init_logging};

#[tokio::main]
async fn main() -> Result<()> {
    // .env is read before logging so MCP_LOG_LEVEL may live there too
    dotenvy::dotenv().ok();
    init_logging(&LoggingConfig::from_env().level);

    // Load configuration from environment
    let config = Config::from_env()?;

    info!("Starting {} v{}", config.server.name, config.server.version);

    // Create the MCP server
    let server = McpServer::new(config)?;

    info!("Server initialized with {} tools", server.list_operations().len());

    StdioTransport::run(server).await?;

    info!("Server shutting down");

    Ok(())
}
