use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::error::ParseError;
use crate::params::NodeParameters;
use crate::types::Item;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
    Auto,
}

/// Node configuration: parameters plus the run-level switches the host would own.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeConfig {
    #[serde(default)]
    pub parameters: NodeParameters,
    #[serde(default)]
    pub continue_on_fail: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credential: Option<String>,
}

pub fn parse_node_config_str(input: &str, format: DocumentFormat) -> Result<NodeConfig, ParseError> {
    parse_str(input, format)
}

/// Parse an items document.
///
/// Accepts an array of objects, an array of `{ "json": {...} }` wrappers, or a single object
/// (one item).
pub fn parse_items_str(input: &str, format: DocumentFormat) -> Result<Vec<Item>, ParseError> {
    let doc: JsonValue = parse_str(input, format)?;
    let elements = match doc {
        JsonValue::Array(arr) => arr,
        obj @ JsonValue::Object(_) => vec![obj],
        other => {
            return Err(ParseError::NotAnObject {
                index: 0,
                found: json_kind(&other),
            })
        }
    };

    elements
        .into_iter()
        .enumerate()
        .map(|(index, v)| match v {
            JsonValue::Object(mut map) => {
                if map.len() == 1 && map.get("json").is_some_and(JsonValue::is_object) {
                    if let Some(inner) = map.remove("json") {
                        return Ok(Item::new(inner));
                    }
                }
                Ok(Item::new(JsonValue::Object(map)))
            }
            other => Err(ParseError::NotAnObject {
                index,
                found: json_kind(&other),
            }),
        })
        .collect()
}

fn parse_str<T: DeserializeOwned>(input: &str, format: DocumentFormat) -> Result<T, ParseError> {
    match format {
        DocumentFormat::Json => Ok(serde_json::from_str(input)?),
        DocumentFormat::Yaml => Ok(serde_yaml::from_str(input)?),
        DocumentFormat::Auto => parse_auto(input),
    }
}

fn parse_auto<T: DeserializeOwned>(input: &str) -> Result<T, ParseError> {
    // JSON always starts with `{` or `[` after trimming; YAML is the fallback either way.
    let trimmed = input.trim_start();
    if trimmed.starts_with('{') || trimmed.starts_with('[') {
        return match serde_json::from_str(input) {
            Ok(v) => Ok(v),
            Err(e) => serde_yaml::from_str(input).map_err(|_| ParseError::Json(e)),
        };
    }
    match serde_yaml::from_str(input) {
        Ok(v) => Ok(v),
        Err(e) => serde_json::from_str(input).map_err(|_| ParseError::Yaml(e)),
    }
}

fn json_kind(v: &JsonValue) -> &'static str {
    match v {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}
