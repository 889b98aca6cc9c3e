//! Client error types.

use std::time::Duration;
use thiserror::Error;

/// Errors that end a client operation.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The server process could not be spawned or the connection broke.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The server sent a catalog that does not match the expected schema.
    #[error("Protocol error: {0}")]
    Protocol(String),

    /// The server rejected or failed a tool call.
    #[error("Invocation error: {0}")]
    Invocation(String),

    /// The tool call did not complete in time.
    #[error("Tool call timed out after {0:?}")]
    Timeout(Duration),

    /// Client configuration is unusable.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The operator's input ended before the session finished.
    #[error("Input closed before the session finished")]
    InputClosed,

    /// Terminal I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ClientError {
    pub fn protocol(msg: impl Into<String>) -> Self {
        Self::Protocol(msg.into())
    }
}

/// Operator input that could not be converted to the declared type.
///
/// Recovered locally: the raw text is sent instead.
#[derive(Debug, Error)]
#[error("cannot convert '{input}' to {kind}: {reason}")]
pub struct CoercionError {
    pub input: String,
    pub kind: String,
    pub reason: String,
}
