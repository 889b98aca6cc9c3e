//! Documents domain module.
//!
//! Turns PDFs linked from the RIMS API (rule books, news attachments) into
//! plain text.

mod error;
mod pdf;

pub use error::DocumentError;
pub use pdf::{PdfTextExtractor, extract_text_from_bytes};
