//! RIMS MCP Library
//!
//! Model Context Protocol tools for the RIMS competition-management API, and
//! an interactive client that drives them.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, logging, the server handler and
//!   its stdio transport
//! - **domains**: business logic organized by bounded contexts
//!   - **rims**: the remote competition API and its payloads
//!   - **documents**: PDF download and text extraction
//!   - **tools**: the MCP tool catalog, router and dispatcher
//! - **client**: operator-facing consumer that spawns the server and
//!   prompts for tool parameters
//!
//! # Example
//!
//! ```rust,no_run
//! use rims_mcp_server::{core::Config, core::McpServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let server = McpServer::new(config)?;
//!     let result = server
//!         .invoke("get_faq_keyword", serde_json::json!({ "keyword": "robot" }))
//!         .await?;
//!     println!("{:?}", result.structured_content);
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
