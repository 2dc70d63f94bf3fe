#![forbid(unsafe_code)]

//! Item model, parameter resolution and request construction for the Trestle node.
//!
//! Nothing in this crate performs I/O; sending requests lives in `trestle-exec`.

pub mod error;
pub mod expressions;
pub mod params;
pub mod parser;
pub mod request;
pub mod types;

pub use crate::error::{BuildError, MissingFieldError, ParameterError, ParseError};
pub use crate::params::{NodeParameters, ParameterResolver};
pub use crate::parser::{parse_items_str, parse_node_config_str, DocumentFormat, NodeConfig};
pub use crate::request::{build_item_request, ApiRequest, DEFAULT_BASE_URL};
pub use crate::types::{ErrorCause, Item, Operation, Resource, ResultRecord, Selection};
