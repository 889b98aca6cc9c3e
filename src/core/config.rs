//! Configuration management for the MCP server.
//!
//! Configuration is read once at start-up and handed to every tool as an
//! explicit value. The three RIMS values are mandatory; everything else has
//! a default.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

use super::error::{Error, Result};

/// Environment variable holding the RIMS API base URL.
pub const ENV_API_ENDPOINT: &str = "API_ENDPOINT";
/// Environment variable holding the competition identifier.
pub const ENV_COMPETITION_ID: &str = "COMPETITION_ID";
/// Environment variable holding the page URL sent as `Referer`.
pub const ENV_WEB_PAGE_URL: &str = "WEB_PAGE_URL";

const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Remote RIMS API configuration.
    pub api: ApiConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Connection settings for the RIMS competition API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the API, without trailing slash.
    pub endpoint: String,

    /// Competition identifier passed as `id` on every request.
    pub competition_id: String,

    /// Public competition page, sent as the `Referer` header.
    pub web_page_url: String,

    /// Upper bound for a single outbound HTTP request, in seconds.
    pub timeout_secs: u64,

    /// Directory for scratch PDF files. `None` uses the system temp dir.
    pub pdf_temp_dir: Option<PathBuf>,
}

impl ApiConfig {
    /// Build an API configuration with the default request timeout.
    pub fn new(
        endpoint: impl Into<String>,
        competition_id: impl Into<String>,
        web_page_url: impl Into<String>,
    ) -> Self {
        Self {
            endpoint: endpoint.into().trim().trim_end_matches('/').to_string(),
            competition_id: competition_id.into().trim().to_string(),
            web_page_url: web_page_url.into().trim().to_string(),
            timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
            pdf_temp_dir: None,
        }
    }

    /// Override the request timeout.
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Request timeout as a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Load the API configuration from environment variables.
    ///
    /// Each of `API_ENDPOINT`, `COMPETITION_ID` and `WEB_PAGE_URL` must be
    /// present and non-blank. `MCP_HTTP_TIMEOUT_SECS`, when set, must be at
    /// least 1.
    pub fn from_env() -> Result<Self> {
        let endpoint = required_var(ENV_API_ENDPOINT)?;
        let competition_id = required_var(ENV_COMPETITION_ID)?;
        let web_page_url = required_var(ENV_WEB_PAGE_URL)?;

        let mut api = Self::new(endpoint, competition_id, web_page_url);

        if let Ok(raw) = std::env::var("MCP_HTTP_TIMEOUT_SECS") {
            api.timeout_secs = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| {
                    Error::config(format!(
                        "MCP_HTTP_TIMEOUT_SECS must be a positive whole number, got '{raw}'"
                    ))
                })?;
        }

        if let Ok(dir) = std::env::var("MCP_PDF_TEMP_DIR") {
            api.pdf_temp_dir = Some(PathBuf::from(dir));
        }

        Ok(api)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: "rims-mcp".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Read `MCP_LOG_LEVEL`, falling back to `info`.
    pub fn from_env() -> Self {
        let mut logging = Self::default();
        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            logging.level = level;
        }
        logging
    }
}

impl Config {
    /// Create a configuration around the given API settings.
    pub fn new(api: ApiConfig) -> Self {
        Self {
            server: ServerConfig::default(),
            logging: LoggingConfig::default(),
            api,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is honoured but never
    /// overrides variables already set in the process environment.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let mut config = Self::new(ApiConfig::from_env()?);

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }
        config.logging = LoggingConfig::from_env();

        info!(
            endpoint = %config.api.endpoint,
            competition_id = %config.api.competition_id,
            timeout_secs = config.api.timeout_secs,
            "RIMS API configured"
        );

        Ok(config)
    }
}

fn required_var(key: &'static str) -> Result<String> {
    match std::env::var(key) {
        Ok(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
        _ => Err(Error::ConfigurationMissing(key)),
    }
}
