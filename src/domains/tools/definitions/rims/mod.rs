//! RIMS tools module.
//!
//! One file per concern:
//! - `faq`: full FAQ and keyword search
//! - `rules`: latest rule book with extracted text
//! - `news`: news list and single article
//! - `teams`: team roster
//!
//! Each tool exposes `invoke()` for the registry and `create_route()` for
//! the rmcp router.

pub mod common;
pub mod faq;
pub mod news;
pub mod rules;
pub mod teams;

pub use faq::{GetFaqKeywordParams, GetFaqKeywordTool, GetFaqParams, GetFaqTool};
pub use news::{GetNewsArticleParams, GetNewsArticleTool, GetNewsListParams, GetNewsListTool};
pub use rules::{GetRulesParams, GetRulesTool};
pub use teams::{GetTeamListParams, GetTeamListTool};
