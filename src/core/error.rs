//! Error types and handling for the MCP server.
//!
//! Tool failures never reach this type: they are reported to the caller as
//! tool results. What remains is what can stop the process from starting.

use thiserror::Error;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Start-up error for the MCP server.
///
/// Missing environment and unusable HTTP client settings surface through
/// this type and are fatal for the process.
#[derive(Debug, Error)]
pub enum Error {
    /// A required environment value is absent or blank.
    #[error("{0} is not set in the environment or .env file")]
    ConfigurationMissing(&'static str),

    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The outbound HTTP client could not be built.
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
