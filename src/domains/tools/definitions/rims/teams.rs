//! Team roster tool.

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

/// `get_team_list` takes no parameters.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct GetTeamListParams {}

/// Team roster with human-readable entry status.
pub struct GetTeamListTool;

impl GetTeamListTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_team_list";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "List the teams registered for the competition with their \
         organisation, links and entry status (status_label: 状態非公開, エントリー済み, 書類審査通過, \
         ビデオ審査通過, 大会出場, 出場辞退, 出場取り消し, 出場取りやめ, 書類審査落選, ビデオ審査落選, \
         審査中, エキシビジョン参加, 不明).";

    #[instrument(skip_all)]
    pub async fn execute(
        _params: &GetTeamListParams,
        api: &RimsApi,
    ) -> Result<CallToolResult, ToolError> {
        info!("Fetching team list");
        fetch_result(api.teams().await)
    }

    /// Parse raw arguments and execute.
    pub async fn invoke(
        arguments: serde_json::Value,
        api: Arc<RimsApi>,
    ) -> Result<CallToolResult, ToolError> {
        let params: GetTeamListParams = parse_params(arguments)?;
        Self::execute(&params, &api).await
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetTeamListParams>(),
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
