//! PDF download and text extraction.
//!
//! The document is fetched with the shared RIMS HTTP client (so the
//! `Referer` header and timeout apply), written to a scratch file and handed
//! to `pdf_extract`. The scratch file is a `NamedTempFile` and is removed
//! when it goes out of scope, whichever way extraction ends.

use reqwest::StatusCode;
use serde_json::Value;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

use super::error::DocumentError;

/// Downloads PDFs and recovers their text.
#[derive(Debug, Clone)]
pub struct PdfTextExtractor {
    http: reqwest::Client,
    temp_dir: Option<PathBuf>,
}

impl PdfTextExtractor {
    /// Create an extractor that writes scratch files to the system temp dir.
    pub fn new(http: reqwest::Client) -> Self {
        Self {
            http,
            temp_dir: None,
        }
    }

    /// Write scratch files under `dir` instead of the system temp dir.
    pub fn with_temp_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.temp_dir = dir;
        self
    }

    /// Fetch the PDF at `url` and return its text.
    #[instrument(skip(self))]
    pub async fn extract_from_url(&self, url: &str) -> Result<String, DocumentError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(DocumentError::Http)?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!("PDF download returned {}", status);
            return Err(DocumentError::Status(status.as_u16()));
        }

        let bytes = response.bytes().await.map_err(DocumentError::Http)?;
        info!("Downloaded PDF ({} bytes)", bytes.len());

        let temp_dir = self.temp_dir.clone();
        tokio::task::spawn_blocking(move || extract_text_from_bytes(&bytes, temp_dir.as_deref()))
            .await
            .map_err(|e| DocumentError::Extraction(format!("extraction task failed: {e}")))?
    }

    /// Like [`extract_from_url`](Self::extract_from_url), folding failures
    /// into an `{"error": ...}` value.
    pub async fn extract_or_error(&self, url: &str) -> Value {
        match self.extract_from_url(url).await {
            Ok(text) => Value::String(text),
            Err(e) => {
                warn!("Document text unavailable for {}: {}", url, e);
                e.to_payload()
            }
        }
    }
}

/// Write `bytes` to a scratch `.pdf` file and extract its text.
///
/// Blocking; call from `spawn_blocking` inside async code.
pub fn extract_text_from_bytes(bytes: &[u8], temp_dir: Option<&Path>) -> Result<String, DocumentError> {
    let mut builder = tempfile::Builder::new();
    builder.prefix("rims-").suffix(".pdf");

    let mut file = match temp_dir {
        Some(dir) => builder.tempfile_in(dir),
        None => builder.tempfile(),
    }
    .map_err(DocumentError::TempFile)?;

    file.write_all(bytes)
        .and_then(|_| file.flush())
        .map_err(DocumentError::TempFile)?;
    debug!("Wrote scratch PDF to {}", file.path().display());

    let path = file.path();
    // pdf_extract panics on some malformed inputs
    let outcome = std::panic::catch_unwind(|| pdf_extract::extract_text(path));

    match outcome {
        Ok(Ok(text)) => Ok(text),
        Ok(Err(e)) => Err(DocumentError::Extraction(e.to_string())),
        Err(_) => Err(DocumentError::Extraction(
            "extractor aborted on malformed document".to_string(),
        )),
    }
}
