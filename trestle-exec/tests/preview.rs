use serde_json::json;
use trestle_core::params::names;
use trestle_core::{Item, NodeParameters, DEFAULT_BASE_URL};
use trestle_exec::executor::{preview_requests, RequestPreview};
use url::Url;

#[test]
fn preview_reports_each_item_without_sending() {
    let base = Url::parse(DEFAULT_BASE_URL).unwrap();
    let items = vec![
        Item::new(json!({"phone": "2069735100", "kind": "validate"})),
        Item::new(json!({"phone": "2069735100", "kind": "batchValidate"})),
        Item::new(json!({"kind": "validate"})),
    ];
    let params = NodeParameters::new()
        .with(names::OPERATION, "$json.kind")
        .with(names::COUNTRY_HINT, "US");

    let previews = preview_requests(&base, &items, &params.for_items(&items));

    assert_eq!(previews.len(), 3);
    match &previews[0] {
        RequestPreview::Request {
            index,
            method,
            url,
            headers,
            body,
        } => {
            assert_eq!(*index, 0);
            assert_eq!(method, "GET");
            assert_eq!(
                url,
                "https://api.trestleiq.com/3.0/phone_intel?phone=2069735100&phone.country_hint=US"
            );
            assert!(!headers.contains_key("x-api-key"));
            assert!(body.is_none());
        }
        other => panic!("expected request, got {other:?}"),
    }
    assert_eq!(previews[1], RequestPreview::Skipped { index: 1 });
    match &previews[2] {
        RequestPreview::Invalid { index, message } => {
            assert_eq!(*index, 2);
            assert!(message.contains("phone"));
        }
        other => panic!("expected invalid, got {other:?}"),
    }
}

#[test]
fn preview_serializes_with_outcome_tag() {
    let v = serde_json::to_value(RequestPreview::Skipped { index: 4 }).unwrap();
    assert_eq!(v, json!({"outcome": "skipped", "index": 4}));
}
