//! Remote fetch error types.

use serde_json::{Value, json};
use std::fmt;
use thiserror::Error;

/// Remote resources exposed by the RIMS competition API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Faq,
    Rules,
    News,
    NewsArticle,
    TeamList,
}

impl Resource {
    /// Human-readable name used in error messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Faq => "FAQ",
            Self::Rules => "rules",
            Self::News => "news",
            Self::NewsArticle => "news article",
            Self::TeamList => "team list",
        }
    }

    /// PHP script serving this resource under `/api/v2/web/competition/`.
    pub fn script(self) -> &'static str {
        match self {
            Self::Faq => "get_faq.php",
            Self::Rules => "get_rule.php",
            Self::News => "get_news.php",
            Self::NewsArticle => "get_article.php",
            Self::TeamList => "get_teams.php",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Failure of a single outbound call to the RIMS API.
///
/// These never escape a tool: they are rendered as `{"error": ...}` payloads.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The API answered with something other than 200 OK.
    #[error("Failed to fetch {resource}. Status code: {status}")]
    Status { resource: Resource, status: u16 },

    /// The request never produced a response (DNS, connect, timeout...).
    #[error("HTTP request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// The body was not the JSON shape we expect.
    #[error("Failed to decode {resource} response: {source}")]
    Decode {
        resource: Resource,
        #[source]
        source: reqwest::Error,
    },
}

impl FetchError {
    /// Render as the in-band error object returned to clients.
    pub fn to_payload(&self) -> Value {
        json!({ "error": self.to_string() })
    }
}
