//! Per-item parameter resolution.
//!
//! The batch loop never reads configuration directly; it asks a [`ParameterResolver`] for each
//! parameter at each item index, so a value may differ from one item to the next.

mod node;

pub use node::{ItemScopedParameters, NodeParameters};

use serde_json::Value as JsonValue;

use crate::error::ParameterError;

/// Parameter names understood by the node.
pub mod names {
    pub const RESOURCE: &str = "resource";
    pub const OPERATION: &str = "operation";
    pub const PHONE_FIELD: &str = "phoneField";
    pub const COUNTRY_HINT: &str = "countryHint";
    pub const NAME_FIELD: &str = "nameField";
    pub const EMAIL_FIELD: &str = "emailField";
    pub const IP_ADDRESS_FIELD: &str = "ipAddressField";
    pub const ADDRESS_FIELD: &str = "addressField";
    pub const CITY_FIELD: &str = "cityField";
    pub const STATE_FIELD: &str = "stateField";
    pub const POSTAL_CODE_FIELD: &str = "postalCodeField";
    pub const INCLUDE_EMAIL_DELIVERABILITY: &str = "includeEmailDeliverability";
    pub const INCLUDE_LITIGATOR_CHECK: &str = "includeLitigatorCheck";
}

pub trait ParameterResolver: Send + Sync {
    /// Value of `name` for the item at `index`, already evaluated. `Ok(None)` when unset.
    fn resolve(&self, name: &str, index: usize) -> Result<Option<JsonValue>, ParameterError>;

    fn string(&self, name: &str, index: usize, default: &str) -> Result<String, ParameterError> {
        match self.resolve(name, index)? {
            None | Some(JsonValue::Null) => Ok(default.to_string()),
            Some(JsonValue::String(s)) => Ok(s),
            Some(JsonValue::Number(n)) => Ok(n.to_string()),
            Some(JsonValue::Bool(b)) => Ok(b.to_string()),
            Some(_) => Err(ParameterError::WrongType {
                name: name.to_string(),
                index,
                expected: "string",
            }),
        }
    }

    fn boolean(&self, name: &str, index: usize, default: bool) -> Result<bool, ParameterError> {
        match self.resolve(name, index)? {
            None | Some(JsonValue::Null) => Ok(default),
            Some(JsonValue::Bool(b)) => Ok(b),
            Some(JsonValue::String(s)) => match s.trim() {
                "true" => Ok(true),
                "false" | "" => Ok(false),
                _ => Err(ParameterError::WrongType {
                    name: name.to_string(),
                    index,
                    expected: "boolean",
                }),
            },
            Some(_) => Err(ParameterError::WrongType {
                name: name.to_string(),
                index,
                expected: "boolean",
            }),
        }
    }
}

impl<F> ParameterResolver for F
where
    F: Fn(&str, usize) -> Result<Option<JsonValue>, ParameterError> + Send + Sync,
{
    fn resolve(&self, name: &str, index: usize) -> Result<Option<JsonValue>, ParameterError> {
        self(name, index)
    }
}
