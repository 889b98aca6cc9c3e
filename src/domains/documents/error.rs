//! Document extraction error types.

use serde_json::{Value, json};
use thiserror::Error;

/// Failures while turning a remote PDF into text.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// Downloading the document failed before any response arrived.
    #[error("HTTP request failed: {0}")]
    Http(#[source] reqwest::Error),

    /// The document host answered with something other than 200 OK.
    #[error("Failed to fetch PDF. Status code: {0}")]
    Status(u16),

    /// The scratch file could not be created or written.
    #[error("Temporary file operation failed: {0}")]
    TempFile(#[source] std::io::Error),

    /// The text extraction library rejected the document.
    #[error("PDF text extraction failed: {0}")]
    Extraction(String),
}

impl DocumentError {
    /// Render as the in-band error object embedded in tool results.
    pub fn to_payload(&self) -> Value {
        json!({ "error": self.to_string() })
    }
}
