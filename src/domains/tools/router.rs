//! Tool Router - builds the rmcp ToolRouter for the stdio server.
//!
//! Each tool knows how to create its own route; this module only lists them.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use crate::domains::rims::RimsApi;

use super::definitions::{
    GetFaqKeywordTool, GetFaqTool, GetNewsArticleTool, GetNewsListTool, GetRulesTool,
    GetTeamListTool,
};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(api: Arc<RimsApi>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(GetFaqTool::create_route(api.clone()))
        .with_route(GetFaqKeywordTool::create_route(api.clone()))
        .with_route(GetRulesTool::create_route(api.clone()))
        .with_route(GetNewsListTool::create_route(api.clone()))
        .with_route(GetNewsArticleTool::create_route(api.clone()))
        .with_route(GetTeamListTool::create_route(api))
}

#[cfg(test)]
mod tests {
    use super::super::registry::ToolRegistry;
    use super::*;
    use crate::core::config::ApiConfig;

    struct TestServer {}

    fn test_api() -> Arc<RimsApi> {
        Arc::new(
            RimsApi::new(ApiConfig::new(
                "http://127.0.0.1:9",
                "1",
                "http://127.0.0.1:9/competition/1",
            ))
            .unwrap(),
        )
    }

    #[test]
    fn test_build_router() {
        let router: ToolRouter<TestServer> = build_tool_router(test_api());
        let tools = router.list_all();
        assert_eq!(tools.len(), 6);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"get_faq"));
        assert!(names.contains(&"get_faq_keyword"));
        assert!(names.contains(&"get_rules"));
        assert!(names.contains(&"get_news_list"));
        assert!(names.contains(&"get_news_article"));
        assert!(names.contains(&"get_team_list"));
    }

    #[test]
    fn test_registry_matches_router() {
        // Ensure registry and router have the same tools
        let api = test_api();
        let registry = ToolRegistry::new(api.clone());
        let registry_names = registry.tool_names();

        let router: ToolRouter<TestServer> = build_tool_router(api);
        let router_tools = router.list_all();
        let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

        assert_eq!(registry_names.len(), router_names.len());
        for name in registry_names {
            assert!(router_names.contains(&name));
        }
    }
}
