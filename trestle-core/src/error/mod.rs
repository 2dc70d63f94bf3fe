use thiserror::Error;

use crate::expressions::{ExprError, TemplateError};

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to parse as JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to parse as YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("items document must be a JSON array of objects (found {found} at index {index})")]
    NotAnObject { index: usize, found: &'static str },
}

/// A required field resolved to nothing for one item.
///
/// `field` is the configured field name, verbatim, so a misconfigured mapping is easy to spot.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("required field \"{field}\" is missing or empty")]
pub struct MissingFieldError {
    pub field: String,
    pub index: usize,
}

impl MissingFieldError {
    pub fn new(field: impl Into<String>, index: usize) -> Self {
        Self {
            field: field.into(),
            index,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParameterError {
    #[error("parameter {name} has no value for item {index}")]
    Missing { name: String, index: usize },
    #[error("parameter {name} expects a {expected} (item {index})")]
    WrongType {
        name: String,
        index: usize,
        expected: &'static str,
    },
    #[error("parameter {name}: {source}")]
    Expression {
        name: String,
        #[source]
        source: ExprError,
    },
    #[error("parameter {name}: {source}")]
    Template {
        name: String,
        #[source]
        source: TemplateError,
    },
    #[error("item index {index} out of range ({len} items)")]
    ItemOutOfRange { index: usize, len: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error(transparent)]
    MissingField(#[from] MissingFieldError),
    #[error(transparent)]
    Parameter(#[from] ParameterError),
    #[error("invalid request URL: {0}")]
    Url(String),
    #[error("failed to serialize request body: {0}")]
    Body(String),
}
