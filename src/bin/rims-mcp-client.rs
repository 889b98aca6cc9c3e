//! RIMS MCP Client Entry Point
//!
//! Spawns the tool server, then walks the operator through one tool call on
//! the terminal. Usage: `rims-mcp-client [--server CMD] [--timeout-secs N]
//! [SERVER_COMMAND [ARGS...]]`.

use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};

use rims_mcp_server::client::{ClientArgs, ClientConfig, InteractiveSession, RimsClient};
use rims_mcp_server::core::{config::LoggingConfig, init_logging};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_logging(&LoggingConfig::from_env().level);

    let config = ClientConfig::from_args(ClientArgs::parse())?;
    info!(
        "Starting server: {} {}",
        config.server_command,
        config.server_args.join(" ")
    );

    let client = RimsClient::connect(&config).await?;

    let stdin = std::io::stdin();
    let mut session = InteractiveSession::new(stdin.lock(), std::io::stdout());
    let outcome = session.run(&client).await;

    if let Err(e) = client.close().await {
        warn!("{}", e);
    }

    let outcome = outcome?;
    info!("Session ended: {:?}", outcome);
    Ok(())
}
