//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating to the tools domain.
//!
//! ## Tool Architecture
//!
//! Tools are defined in `domains/tools/definitions/`. The rmcp ToolRouter is
//! built in `domains/tools/router.rs` and the catalog/dispatcher lives in
//! `domains/tools/registry.rs`; both are fed the same shared `RimsApi`.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler,
    handler::server::tool::{ToolCallContext, ToolRouter},
    model::*,
    service::RequestContext,
};
use std::sync::Arc;
use tracing::{debug, info};

use super::config::Config;
use super::error::Result as CoreResult;
use crate::domains::rims::RimsApi;
use crate::domains::tools::{ToolError, ToolRegistry, build_tool_router};

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp. It is cheap
/// to clone; all state is behind `Arc`s and nothing is mutated after start-up.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Catalog and dispatcher.
    registry: Arc<ToolRegistry>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    ///
    /// Fails only if the outbound HTTP client cannot be built.
    pub fn new(config: Config) -> CoreResult<Self> {
        let config = Arc::new(config);
        let api = Arc::new(RimsApi::new(config.api.clone())?);

        Ok(Self {
            tool_router: build_tool_router::<Self>(api.clone()),
            registry: Arc::new(ToolRegistry::new(api)),
            config,
        })
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// All tools in catalog order.
    pub fn list_operations(&self) -> Vec<Tool> {
        ToolRegistry::list_operations()
    }

    /// Metadata of a single tool.
    pub fn describe(&self, name: &str) -> Result<Tool, ToolError> {
        ToolRegistry::describe(name)
    }

    /// Call a tool by name without going through the transport.
    pub async fn invoke(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<CallToolResult, ToolError> {
        self.registry.invoke(name, arguments).await
    }
}

/// ServerHandler implementation.
///
/// Calls are routed through the `ToolRouter`; the listing comes from the
/// registry because the router does not keep catalog order.
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        info!("Advertising {} v{}", self.name(), self.version());
        ServerInfo {
            instructions: Some(
                "RIMS competition assistant. Tools: get_faq, get_faq_keyword, get_rules, \
                 get_news_list, get_news_article, get_team_list. Failed lookups return \
                 an object with an \"error\" message instead of failing the call."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        let tools = self.list_operations();
        debug!("Listing {} tools", tools.len());
        Ok(ListToolsResult::with_all_items(tools))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let tool_context = ToolCallContext::new(self, request, context);
        self.tool_router.call(tool_context).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::ApiConfig;

    fn test_server() -> McpServer {
        McpServer::new(Config::new(ApiConfig::new(
            "http://127.0.0.1:9",
            "1",
            "http://127.0.0.1:9/competition/1",
        )))
        .unwrap()
    }

    #[test]
    fn test_list_operations_in_catalog_order() {
        let server = test_server();
        let names: Vec<String> = server
            .list_operations()
            .iter()
            .map(|t| t.name.to_string())
            .collect();
        assert_eq!(names, server.registry.tool_names());
    }

    #[test]
    fn test_every_listed_tool_is_routed() {
        let server = test_server();
        for tool in server.list_operations() {
            assert!(server.tool_router.has_route(&tool.name), "{}", tool.name);
        }
        assert!(server.describe("get_weather").is_err());
    }
}
