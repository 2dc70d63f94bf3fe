//! Dry run: what each item would send, without calling the API.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value as JsonValue;
use trestle_core::{build_item_request, Item, ParameterResolver};
use url::Url;

use crate::executor::result::ItemError;
use crate::secrets::redact_headers;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RequestPreview {
    Request {
        index: usize,
        method: String,
        url: String,
        headers: BTreeMap<String, String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        body: Option<JsonValue>,
    },
    Skipped {
        index: usize,
    },
    Invalid {
        index: usize,
        message: String,
    },
}

pub fn preview_requests(
    base_url: &Url,
    items: &[Item],
    params: &dyn ParameterResolver,
) -> Vec<RequestPreview> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| match build_item_request(base_url, params, item, index) {
            Ok(Some(req)) => RequestPreview::Request {
                index,
                method: req.method.as_str().to_string(),
                url: req.url.to_string(),
                headers: redact_headers(&req.headers),
                body: req.body,
            },
            Ok(None) => RequestPreview::Skipped { index },
            Err(e) => RequestPreview::Invalid {
                index,
                message: ItemError::from(e).to_string(),
            },
        })
        .collect()
}
