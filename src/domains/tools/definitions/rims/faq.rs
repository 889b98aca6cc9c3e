//! FAQ tools.
//!
//! `get_faq` returns every answered question of the competition,
//! `get_faq_keyword` narrows the list with the API's own keyword search.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument};

use super::common::{fetch_result, parse_params};
use crate::domains::rims::RimsApi;
use crate::domains::tools::ToolError;

// ============================================================================
// get_faq
// ============================================================================

/// `get_faq` takes no parameters.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct GetFaqParams {}

/// Full FAQ listing.
pub struct GetFaqTool;

impl GetFaqTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_faq";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Fetch all answered FAQ entries of the competition (number, question, answer, images).";

    #[instrument(skip_all)]
    pub async fn execute(_params: &GetFaqParams, api: &RimsApi) -> Result<CallToolResult, ToolError> {
        info!("Fetching full FAQ");
        fetch_result(api.faq("").await)
    }

    /// Parse raw arguments and execute.
    pub async fn invoke(
        arguments: serde_json::Value,
        api: Arc<RimsApi>,
    ) -> Result<CallToolResult, ToolError> {
        let params: GetFaqParams = parse_params(arguments)?;
        Self::execute(&params, &api).await
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetFaqParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for the stdio server.
    pub fn create_route<S>(api: Arc<RimsApi>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let api = api.clone();
            async move {
                Self::invoke(serde_json::Value::Object(args), api)
                    .await
                    .map_err(McpError::from)
            }
            .boxed()
        })
    }
}

// ============================================================================
// get_faq_keyword
// ============================================================================

/// Parameters for the keyword FAQ search.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetFaqKeywordParams {
    /// Free-text keyword matched against questions and answers.
    #[schemars(description = "Keyword to search for in questions and answers")]
    pub keyword: String,
}

/// FAQ keyword search.
pub struct GetFaqKeywordTool;

impl GetFaqKeywordTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_faq_keyword";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Search the competition FAQ by keyword. Returns matching answered entries.";

    #[instrument(skip_all, fields(keyword = %params.keyword))]
    pub async fn execute(
        params: &GetFaqKeywordParams,
        api: &RimsApi,
    ) -> Result<CallToolResult, ToolError> {
        info!("Searching FAQ for '{}'", params.keyword);
        fetch_result(api.faq(&params.keyword).await)
    }

    /// Parse raw arguments and execute.
    pub async fn invoke(
        arguments: serde_json::Value,
        api: Arc<RimsApi>,
    ) -> Result<CallToolResult, ToolError> {
        let params: GetFaqKeywordParams = parse_params(arguments)?;
        Self::execute(&params, &api).await
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetFaqKeywordParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for the stdio server.
    pub fn create_route<S>(api: Arc<RimsApi>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let api = api.clone();
            async move {
                Self::invoke(serde_json::Value::Object(args), api)
                    .await
                    .map_err(McpError::from)
            }
            .boxed()
        })
    }
}
