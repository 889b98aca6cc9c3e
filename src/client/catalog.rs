//! Client-side view of the tool catalog.
//!
//! Tool input schemas are converted once into a fixed shape. Anything that
//! does not fit is a protocol error rather than something to guess around.

use rmcp::model::Tool;
use serde_json::Value;
use std::fmt;

use super::error::ClientError;

/// Declared type of a tool parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamType {
    String,
    Number,
    Integer,
    Boolean,
    Object,
    Array,
    /// Any other JSON Schema type tag; input is passed through as text.
    Other(String),
}

impl ParamType {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "string" => Self::String,
            "number" => Self::Number,
            "integer" => Self::Integer,
            "boolean" => Self::Boolean,
            "object" => Self::Object,
            "array" => Self::Array,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn tag(&self) -> &str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Integer => "integer",
            Self::Boolean => "boolean",
            Self::Object => "object",
            Self::Array => "array",
            Self::Other(tag) => tag,
        }
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// One declared parameter of a tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamSpec {
    pub name: String,
    pub kind: ParamType,
    pub required: bool,
}

/// A tool as the client sees it: name, description and ordered parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationDescriptor {
    pub name: String,
    pub description: String,
    pub params: Vec<ParamSpec>,
}

impl OperationDescriptor {
    /// Convert an rmcp `Tool`, validating its input schema.
    pub fn from_tool(tool: &Tool) -> Result<Self, ClientError> {
        let name = tool.name.to_string();
        let schema = &tool.input_schema;

        let required: Vec<&str> = match schema.get("required") {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| {
                    item.as_str().ok_or_else(|| {
                        ClientError::protocol(format!(
                            "tool '{name}': 'required' entries must be strings, got {item}"
                        ))
                    })
                })
                .collect::<Result<_, _>>()?,
            Some(other) => {
                return Err(ClientError::protocol(format!(
                    "tool '{name}': 'required' must be an array, got {other}"
                )));
            }
        };

        let params = match schema.get("properties") {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Object(properties)) => properties
                .iter()
                .map(|(param, definition)| {
                    Ok(ParamSpec {
                        name: param.clone(),
                        kind: param_type(&name, param, definition)?,
                        required: required.contains(&param.as_str()),
                    })
                })
                .collect::<Result<_, ClientError>>()?,
            Some(other) => {
                return Err(ClientError::protocol(format!(
                    "tool '{name}': 'properties' must be an object, got {other}"
                )));
            }
        };

        Ok(Self {
            description: tool
                .description
                .as_ref()
                .map(|d| d.to_string())
                .unwrap_or_default(),
            name,
            params,
        })
    }
}

/// Resolve the `type` of one property definition.
///
/// A missing type means free text. A type list such as `["string", "null"]`
/// resolves to its first non-null member.
fn param_type(tool: &str, param: &str, definition: &Value) -> Result<ParamType, ClientError> {
    let definition = definition.as_object().ok_or_else(|| {
        ClientError::protocol(format!(
            "tool '{tool}': definition of '{param}' must be an object, got {definition}"
        ))
    })?;

    match definition.get("type") {
        None => Ok(ParamType::String),
        Some(Value::String(tag)) => Ok(ParamType::from_tag(tag)),
        Some(Value::Array(tags)) => {
            let mut tags = tags.iter().map(|tag| {
                tag.as_str().ok_or_else(|| {
                    ClientError::protocol(format!(
                        "tool '{tool}': type of '{param}' contains a non-string entry {tag}"
                    ))
                })
            });
            let mut fallback = None;
            for tag in tags.by_ref() {
                let tag = tag?;
                if tag != "null" {
                    return Ok(ParamType::from_tag(tag));
                }
                fallback = Some(tag);
            }
            Ok(fallback.map(ParamType::from_tag).unwrap_or(ParamType::String))
        }
        Some(other) => Err(ClientError::protocol(format!(
            "tool '{tool}': type of '{param}' must be a string or array, got {other}"
        ))),
    }
}
