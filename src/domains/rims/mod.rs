//! RIMS domain module.
//!
//! Client and data shapes for the RIMS competition-management API: FAQ,
//! rule books, news and team roster of a single competition.

mod api;
mod error;
pub mod models;

pub use api::RimsApi;
pub use error::{FetchError, Resource};
pub use models::{
    FaqEntry, FaqList, NO_RULE_BOOK, NewsArticle, NewsArticlePayload, NewsList, RulesPayload,
    RulesSummary, Team, TeamList, TeamStatus,
};
