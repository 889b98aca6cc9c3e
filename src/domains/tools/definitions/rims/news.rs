//! News tools: headline listing and single-article retrieval.

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
// get_news_list
// ============================================================================

/// `get_news_list` takes no parameters.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct GetNewsListParams {}

pub struct GetNewsListTool;

impl GetNewsListTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_news_list";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "List the news published for the competition. Use get_news_article for the full text.";

    #[instrument(skip_all)]
    pub async fn execute(
        _params: &GetNewsListParams,
        api: &RimsApi,
    ) -> Result<CallToolResult, ToolError> {
        info!("Fetching news list");
        fetch_result(api.news_list().await)
    }

    /// Parse raw arguments and execute.
    pub async fn invoke(
        arguments: serde_json::Value,
        api: Arc<RimsApi>,
    ) -> Result<CallToolResult, ToolError> {
        let params: GetNewsListParams = parse_params(arguments)?;
        Self::execute(&params, &api).await
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetNewsListParams>(),
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
// get_news_article
// ============================================================================

/// Parameters for fetching a single article.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetNewsArticleParams {
    /// Identifier of the article, as listed by `get_news_list`.
    #[schemars(description = "Article identifier from get_news_list")]
    pub article_id: String,
}

pub struct GetNewsArticleTool;

impl GetNewsArticleTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_news_article";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Fetch one news article (title, content, date, image). \
         When the article links a PDF, its extracted text is returned as ocr_text.";

    #[instrument(skip_all, fields(article_id = %params.article_id))]
    pub async fn execute(
        params: &GetNewsArticleParams,
        api: &RimsApi,
    ) -> Result<CallToolResult, ToolError> {
        info!("Fetching news article {}", params.article_id);
        fetch_result(api.news_article(&params.article_id).await)
    }

    /// Parse raw arguments and execute.
    pub async fn invoke(
        arguments: serde_json::Value,
        api: Arc<RimsApi>,
    ) -> Result<CallToolResult, ToolError> {
        let params: GetNewsArticleParams = parse_params(arguments)?;
        Self::execute(&params, &api).await
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetNewsArticleParams>(),
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
