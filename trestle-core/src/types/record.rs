use serde::{Deserialize, Serialize};
use serde_json::{json, Value as JsonValue};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ErrorKind {
    MissingField,
    Parameter,
    RemoteService,
}

/// Why a record failed, in a form that survives serialization into the output stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorCause {
    pub kind: ErrorKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<JsonValue>,
}

impl ErrorCause {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            field: None,
            status: None,
            body: None,
        }
    }
}

/// One entry of the output stream.
///
/// `correlates_with` is the index of the input item that produced it. Skipped items produce no
/// record, so the position of a record in the output is not its input index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultRecord {
    pub json: JsonValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorCause>,
    pub correlates_with: usize,
}

impl ResultRecord {
    pub fn success(json: JsonValue, index: usize) -> Self {
        Self {
            json,
            error: None,
            correlates_with: index,
        }
    }

    pub fn failure(cause: ErrorCause, index: usize) -> Self {
        Self {
            json: json!({ "error": cause.message }),
            error: Some(cause),
            correlates_with: index,
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_record_carries_message_in_json() {
        let rec = ResultRecord::failure(ErrorCause::new(ErrorKind::RemoteService, "boom"), 3);
        assert_eq!(rec.json, json!({"error": "boom"}));
        assert_eq!(rec.correlates_with, 3);
        assert!(rec.is_error());

        let v = serde_json::to_value(&rec).unwrap();
        assert_eq!(v["correlatesWith"], 3);
        assert_eq!(v["error"]["kind"], "remoteService");
    }

    #[test]
    fn success_record_omits_error_key() {
        let rec = ResultRecord::success(json!({"is_valid": true}), 0);
        let v = serde_json::to_value(&rec).unwrap();
        assert!(v.get("error").is_none());
    }
}
