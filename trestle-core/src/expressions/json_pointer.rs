use serde_json::Value as JsonValue;

/// RFC 6901 pointer, validated at parse time and resolved against an item later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonPointer {
    raw: String,
}

impl JsonPointer {
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn parse(fragment: &str) -> Result<Self, JsonPointerError> {
        if fragment.is_empty() {
            return Ok(Self { raw: String::new() });
        }
        if !fragment.starts_with('/') {
            return Err(JsonPointerError::InvalidPrefix);
        }

        let mut chars = fragment.chars();
        while let Some(ch) = chars.next() {
            if ch == '~' && !matches!(chars.next(), Some('0' | '1')) {
                return Err(JsonPointerError::InvalidEscape);
            }
        }

        Ok(Self {
            raw: fragment.to_string(),
        })
    }

    pub fn resolve<'a>(&self, value: &'a JsonValue) -> Option<&'a JsonValue> {
        value.pointer(&self.raw)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum JsonPointerError {
    #[error("json pointer must start with '/'")]
    InvalidPrefix,
    #[error("json pointer contains invalid escape (only ~0 and ~1 are allowed)")]
    InvalidEscape,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn resolves_escaped_segments() {
        let p = JsonPointer::parse("/a~1b/0").unwrap();
        let v = json!({"a/b": ["x"]});
        assert_eq!(p.resolve(&v), Some(&json!("x")));
    }

    #[test]
    fn rejects_bad_pointers() {
        assert_eq!(JsonPointer::parse("a"), Err(JsonPointerError::InvalidPrefix));
        assert_eq!(JsonPointer::parse("/a~2"), Err(JsonPointerError::InvalidEscape));
    }
}
