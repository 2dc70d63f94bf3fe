use serde_json::Value as JsonValue;
use trestle_core::{build_item_request, Item, ParameterResolver};
use url::Url;

use crate::executor::api::ApiTransport;
use crate::executor::result::ItemError;

#[derive(Debug)]
pub enum ItemOutcome {
    Succeeded(JsonValue),
    /// The resource/operation pair has no request; nothing is emitted for the item.
    Skipped,
    Failed(ItemError),
}

/// Build and send the request for one item. Never panics or returns early on failure; the
/// caller decides whether a failure ends the batch.
#[tracing::instrument(level = "debug", skip(transport, base_url, params, item))]
pub async fn process_item(
    transport: &dyn ApiTransport,
    base_url: &Url,
    params: &dyn ParameterResolver,
    item: &Item,
    index: usize,
) -> ItemOutcome {
    let req = match build_item_request(base_url, params, item, index) {
        Ok(Some(r)) => r,
        Ok(None) => return ItemOutcome::Skipped,
        Err(e) => return ItemOutcome::Failed(e.into()),
    };

    match transport.call(req).await {
        Ok(json) => ItemOutcome::Succeeded(json),
        Err(e) => ItemOutcome::Failed(e.into()),
    }
}
