use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value as JsonValue;

use super::json_pointer::{JsonPointer, JsonPointerError};

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9\-_]+$").expect("valid regex"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemExpr {
    ItemIndex,
    Json {
        path: Vec<String>,
        pointer: Option<JsonPointer>,
    },
}

pub fn parse_item_expr(input: &str) -> Result<ItemExpr, ExprError> {
    let s = input.trim();
    let body = s.strip_prefix('$').ok_or(ExprError::MissingDollarPrefix)?;

    let (head, pointer) = match body.split_once('#') {
        Some((h, p)) => (h, Some(JsonPointer::parse(p)?)),
        None => (body, None),
    };

    if head == "itemIndex" {
        if pointer.is_some() {
            return Err(ExprError::PointerNotAllowed(head.to_string()));
        }
        return Ok(ItemExpr::ItemIndex);
    }

    let mut parts = head.split('.');
    match parts.next() {
        Some("json") => {}
        Some(other) => return Err(ExprError::UnknownRoot(other.to_string())),
        None => return Err(ExprError::Empty),
    }

    let mut path = Vec::new();
    for p in parts {
        if !NAME_RE.is_match(p) {
            return Err(ExprError::InvalidName(p.to_string()));
        }
        path.push(p.to_string());
    }

    Ok(ItemExpr::Json { path, pointer })
}

impl ItemExpr {
    /// Missing keys evaluate to `null` rather than failing.
    pub fn evaluate(&self, item: &JsonValue, index: usize) -> JsonValue {
        match self {
            ItemExpr::ItemIndex => JsonValue::from(index),
            ItemExpr::Json { path, pointer } => {
                let mut cur = item;
                for key in path {
                    match cur.get(key) {
                        Some(v) => cur = v,
                        None => return JsonValue::Null,
                    }
                }
                match pointer {
                    Some(p) => p.resolve(cur).cloned().unwrap_or(JsonValue::Null),
                    None => cur.clone(),
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExprError {
    #[error("expression must start with '$'")]
    MissingDollarPrefix,
    #[error("empty expression")]
    Empty,
    #[error("unknown expression root: ${0} (expected $json or $itemIndex)")]
    UnknownRoot(String),
    #[error("invalid key in expression path: {0:?}")]
    InvalidName(String),
    #[error("${0} does not take a json pointer")]
    PointerNotAllowed(String),
    #[error(transparent)]
    Pointer(#[from] JsonPointerError),
}
