use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// One workflow item. Only ever read from, never mutated by the node.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Item {
    pub json: JsonValue,
}

impl Item {
    pub fn new(json: JsonValue) -> Self {
        Self { json }
    }

    /// Text value of a mapped field.
    ///
    /// A field name starting with `/` is read as a JSON pointer into the item, anything else is a
    /// top-level key. Absent, `null` and empty-string values all come back as `None`.
    pub fn text_field(&self, field: &str) -> Option<String> {
        if field.is_empty() {
            return None;
        }
        let v = if field.starts_with('/') {
            self.json.pointer(field)
        } else {
            self.json.get(field)
        }?;
        value_to_text(v).filter(|s| !s.is_empty())
    }
}

pub fn value_to_text(v: &JsonValue) -> Option<String> {
    match v {
        JsonValue::Null => None,
        JsonValue::String(s) => Some(s.clone()),
        JsonValue::Number(n) => Some(n.to_string()),
        JsonValue::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn text_field_reads_keys_and_pointers() {
        let item = Item::new(json!({
            "phone": 2069735100u64,
            "contact": {"name": "Jane Doe"},
            "blank": "",
            "nothing": null
        }));
        assert_eq!(item.text_field("phone").as_deref(), Some("2069735100"));
        assert_eq!(item.text_field("/contact/name").as_deref(), Some("Jane Doe"));
        assert_eq!(item.text_field("blank"), None);
        assert_eq!(item.text_field("nothing"), None);
        assert_eq!(item.text_field("absent"), None);
        assert_eq!(item.text_field(""), None);
    }
}
