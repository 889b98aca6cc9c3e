//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file for better maintainability.

pub mod rims;

pub use rims::{
    GetFaqKeywordParams, GetFaqKeywordTool, GetFaqParams, GetFaqTool, GetNewsArticleParams,
    GetNewsArticleTool, GetNewsListParams, GetNewsListTool, GetRulesParams, GetRulesTool,
    GetTeamListParams, GetTeamListTool,
};
