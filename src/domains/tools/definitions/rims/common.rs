//! Common utilities shared across RIMS tools.

use rmcp::model::{CallToolResult, Content};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use crate::domains::rims::FetchError;
use crate::domains::tools::ToolError;

/// Deserialize tool arguments into a params struct.
///
/// `null` is accepted as "no arguments".
pub fn parse_params<P: DeserializeOwned>(arguments: Value) -> Result<P, ToolError> {
    let arguments = match arguments {
        Value::Null => Value::Object(Default::default()),
        other => other,
    };
    serde_json::from_value(arguments).map_err(|e| ToolError::invalid_arguments(e.to_string()))
}

/// Successful result carrying `payload` as JSON text and structured content.
pub fn json_result<T: Serialize>(payload: &T) -> Result<CallToolResult, ToolError> {
    let value = serde_json::to_value(payload).map_err(|e| ToolError::internal(e.to_string()))?;
    let text =
        serde_json::to_string_pretty(&value).map_err(|e| ToolError::internal(e.to_string()))?;

    let mut result = CallToolResult::success(vec![Content::text(text)]);
    result.structured_content = Some(value);
    Ok(result)
}

/// Turn a fetch outcome into a tool result.
///
/// Failures become an `{"error": ...}` payload on a successful result so the
/// caller always has something to render.
pub fn fetch_result<T: Serialize>(
    outcome: Result<T, FetchError>,
) -> Result<CallToolResult, ToolError> {
    match outcome {
        Ok(payload) => json_result(&payload),
        Err(e) => {
            warn!("{}", e);
            json_result(&e.to_payload())
        }
    }
}
