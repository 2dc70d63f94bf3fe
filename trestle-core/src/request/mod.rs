//! Outbound request construction.
//!
//! Every item gets a freshly built [`ApiRequest`]; nothing is cached or reused across items.
//! Authentication is not applied here.

mod phone_intel;
mod real_contact;

pub use phone_intel::PhoneIntelQuery;
pub use real_contact::RealContactBody;

use std::collections::BTreeMap;

use serde_json::Value as JsonValue;
use url::Url;

use crate::error::BuildError;
use crate::params::{names, ParameterResolver};
use crate::types::{Item, Operation, Resource, Selection};

pub const DEFAULT_BASE_URL: &str = "https://api.trestleiq.com";
pub const PHONE_INTEL_PATH: &str = "/3.0/phone_intel";
pub const REAL_CONTACT_PATH: &str = "/1.1/real_contact";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: Url,
    pub headers: BTreeMap<String, String>,
    pub body: Option<JsonValue>,
}

impl ApiRequest {
    pub fn get(url: Url) -> Self {
        Self {
            method: Method::Get,
            url,
            headers: BTreeMap::new(),
            body: None,
        }
    }

    pub fn post_json(url: Url, body: JsonValue) -> Self {
        let headers =
            BTreeMap::from([("Content-Type".to_string(), "application/json".to_string())]);
        Self {
            method: Method::Post,
            url,
            headers,
            body: Some(body),
        }
    }
}

/// Resolve which request the item at `index` turns into.
pub fn resolve_selection(
    params: &dyn ParameterResolver,
    index: usize,
) -> Result<Selection, BuildError> {
    let resource = params.string(names::RESOURCE, index, Resource::PhoneValidation.as_str())?;
    let resource = Resource::parse(&resource);
    let default_op = resource.map(|r| r.default_operation().as_str()).unwrap_or("");
    let operation = params.string(names::OPERATION, index, default_op)?;
    Ok(Selection::from_pair(resource, Operation::parse(&operation)))
}

/// Build the request for one item.
///
/// `Ok(None)` means the resource/operation pair has no request and the item is skipped.
pub fn build_item_request(
    base_url: &Url,
    params: &dyn ParameterResolver,
    item: &Item,
    index: usize,
) -> Result<Option<ApiRequest>, BuildError> {
    match resolve_selection(params, index)? {
        Selection::PhoneIntel => {
            let q = PhoneIntelQuery::from_item(params, item, index)?;
            Ok(Some(q.into_request(base_url)?))
        }
        Selection::RealContact => {
            let body = RealContactBody::from_item(params, item, index)?;
            Ok(Some(body.into_request(base_url)?))
        }
        Selection::Skip => Ok(None),
    }
}

/// `base_url` with `path` appended to whatever path it already has.
pub(crate) fn endpoint_url(base_url: &Url, path: &str) -> Result<Url, BuildError> {
    if base_url.cannot_be_a_base() {
        return Err(BuildError::Url(format!("{base_url} cannot be a base URL")));
    }
    let mut url = base_url.clone();
    let prefix = base_url.path().trim_end_matches('/').to_string();
    url.set_path(&format!("{prefix}{path}"));
    url.set_query(None);
    url.set_fragment(None);
    Ok(url)
}
