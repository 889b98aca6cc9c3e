//! Rule-book tool.
//!
//! Returns the competition's rule metadata together with the text of the
//! most recent rule book PDF.

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

/// `get_rules` takes no parameters.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct GetRulesParams {}

/// Latest rule book retrieval.
pub struct GetRulesTool;

impl GetRulesTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_rules";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Fetch the competition rules: name, abstract, field books, \
         other documents, and the extracted text of the latest rule book PDF.";

    #[instrument(skip_all)]
    pub async fn execute(_params: &GetRulesParams, api: &RimsApi) -> Result<CallToolResult, ToolError> {
        info!("Fetching rules");
        fetch_result(api.rules().await)
    }

    /// Parse raw arguments and execute.
    pub async fn invoke(
        arguments: serde_json::Value,
        api: Arc<RimsApi>,
    ) -> Result<CallToolResult, ToolError> {
        let params: GetRulesParams = parse_params(arguments)?;
        Self::execute(&params, &api).await
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetRulesParams>(),
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
