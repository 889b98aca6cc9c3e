//! Common test infrastructure
//!
//! A mock of the RIMS competition API served by axum on a random local port,
//! plus fixtures for the payloads and PDF documents it hands out.

#![allow(dead_code)]

mod fixtures;
mod server;

pub use fixtures::*;
pub use server::{MockRims, RecordedRequest};

use rims_mcp_server::core::{ApiConfig, Config, McpServer};

pub const COMPETITION_ID: &str = "7";
pub const WEB_PAGE_URL: &str = "https://rims.example.org/competition/7";

/// API settings pointing at `endpoint`.
pub fn api_config(endpoint: &str) -> ApiConfig {
    ApiConfig::new(endpoint, COMPETITION_ID, WEB_PAGE_URL).with_timeout_secs(5)
}

/// A server wired to `endpoint`, with scratch PDFs written under `temp_dir`.
pub fn server_for(endpoint: &str, temp_dir: &std::path::Path) -> McpServer {
    let mut api = api_config(endpoint);
    api.pdf_temp_dir = Some(temp_dir.to_path_buf());
    McpServer::new(Config::new(api)).expect("Failed to build server")
}
