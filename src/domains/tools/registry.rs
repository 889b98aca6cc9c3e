//! Tool Registry - the operation catalog and its dispatcher.
//!
//! This module provides:
//! - The ordered catalog of all available tools
//! - Lookup of a single tool by name
//! - Dispatch of a tool call by name

use std::sync::Arc;
use tracing::{info, warn};

use rmcp::model::{CallToolResult, Tool};

use crate::domains::rims::RimsApi;

use super::ToolError;
use super::definitions::{
    GetFaqKeywordTool, GetFaqTool, GetNewsArticleTool, GetNewsListTool, GetRulesTool,
    GetTeamListTool,
};

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - manages all available tools.
pub struct ToolRegistry {
    api: Arc<RimsApi>,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(api: Arc<RimsApi>) -> Self {
        Self { api }
    }

    /// Get all tool names, in catalog order.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![
            GetFaqTool::NAME,
            GetFaqKeywordTool::NAME,
            GetRulesTool::NAME,
            GetNewsListTool::NAME,
            GetNewsArticleTool::NAME,
            GetTeamListTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata), in catalog order.
    ///
    /// This is the single source of truth for the catalog.
    pub fn list_operations() -> Vec<Tool> {
        vec![
            GetFaqTool::to_tool(),
            GetFaqKeywordTool::to_tool(),
            GetRulesTool::to_tool(),
            GetNewsListTool::to_tool(),
            GetNewsArticleTool::to_tool(),
            GetTeamListTool::to_tool(),
        ]
    }

    /// Look up a single tool by name.
    pub fn describe(name: &str) -> Result<Tool, ToolError> {
        Self::list_operations()
            .into_iter()
            .find(|tool| tool.name == name)
            .ok_or_else(|| ToolError::not_found(name))
    }

    /// Dispatch a tool call to the matching tool.
    ///
    /// Only unknown names and malformed arguments fail; remote failures come
    /// back as `{"error": ...}` payloads inside a successful result.
    pub async fn invoke(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<CallToolResult, ToolError> {
        info!("Dispatching tool call: {}", name);
        let api = self.api.clone();

        match name {
            GetFaqTool::NAME => GetFaqTool::invoke(arguments, api).await,
            GetFaqKeywordTool::NAME => GetFaqKeywordTool::invoke(arguments, api).await,
            GetRulesTool::NAME => GetRulesTool::invoke(arguments, api).await,
            GetNewsListTool::NAME => GetNewsListTool::invoke(arguments, api).await,
            GetNewsArticleTool::NAME => GetNewsArticleTool::invoke(arguments, api).await,
            GetTeamListTool::NAME => GetTeamListTool::invoke(arguments, api).await,
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(ToolError::not_found(name))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::ApiConfig;

    fn test_registry() -> ToolRegistry {
        let api = RimsApi::new(ApiConfig::new(
            "http://127.0.0.1:9",
            "1",
            "http://127.0.0.1:9/competition/1",
        ))
        .unwrap();
        ToolRegistry::new(Arc::new(api))
    }

    #[test]
    fn test_registry_tool_names() {
        let registry = test_registry();
        let names = registry.tool_names();
        assert_eq!(
            names,
            vec![
                "get_faq",
                "get_faq_keyword",
                "get_rules",
                "get_news_list",
                "get_news_article",
                "get_team_list",
            ]
        );
    }

    #[test]
    fn test_catalog_matches_names() {
        let registry = test_registry();
        let catalog: Vec<String> = ToolRegistry::list_operations()
            .iter()
            .map(|t| t.name.to_string())
            .collect();
        assert_eq!(catalog, registry.tool_names());
    }

    #[test]
    fn test_describe_known_tools() {
        for name in test_registry().tool_names() {
            let tool = ToolRegistry::describe(name).unwrap();
            assert_eq!(tool.name, name);
            assert!(tool.description.is_some());
        }
    }

    #[test]
    fn test_describe_unknown_tool() {
        for name in ["", "get_faqs", "GET_FAQ", "unknown"] {
            let err = ToolRegistry::describe(name).unwrap_err();
            assert!(matches!(err, ToolError::NotFound(ref n) if n == name));
        }
    }

    #[test]
    fn test_invoke_unknown() {
        let registry = test_registry();
        let result = tokio_test::block_on(registry.invoke("unknown", serde_json::json!({})));
        assert!(matches!(result, Err(ToolError::NotFound(_))));
    }

    #[test]
    fn test_invoke_missing_required_argument() {
        let registry = test_registry();
        let result = tokio_test::block_on(registry.invoke("get_faq_keyword", serde_json::json!({})));
        assert!(matches!(result, Err(ToolError::InvalidArguments(_))));
    }
}
