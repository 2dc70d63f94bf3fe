use std::sync::Arc;

use serde_json::json;
use trestle_core::params::names;
use trestle_core::{Item, NodeParameters};
use trestle_exec::executor::{HttpError, NoOpEventSink, ReqwestHttpClient};
use trestle_exec::secrets::{SecretValue, StaticSecretsProvider, DEFAULT_CREDENTIAL};
use trestle_exec::{ApiTransport, BatchRunner, ExecConfig, RemoteError, TrestleClient};
use url::Url;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_with_key(key: Option<&str>) -> TrestleClient {
    let mut secrets = StaticSecretsProvider::new();
    if let Some(k) = key {
        secrets = secrets.with(DEFAULT_CREDENTIAL, SecretValue::new(k));
    }
    TrestleClient::new(
        Arc::new(ReqwestHttpClient::new().unwrap()),
        Arc::new(secrets),
        DEFAULT_CREDENTIAL,
    )
}

fn config_for(server: &MockServer, continue_on_fail: bool) -> ExecConfig {
    ExecConfig {
        base_url: Url::parse(&server.uri()).unwrap(),
        continue_on_fail,
    }
}

#[tokio::test]
async fn phone_lookup_sends_key_and_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/3.0/phone_intel"))
        .and(query_param("phone", "2069735100"))
        .and(query_param("addons", "litigator_check"))
        .and(header("x-api-key", "test-key"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"phone_number": "2069735100", "is_valid": true})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_with_key(Some("test-key"));
    let config = config_for(&server, false);
    let runner = BatchRunner {
        transport: &client,
        events: &NoOpEventSink,
        config: &config,
    };
    let items = vec![Item::new(json!({"phone": "2069735100"}))];
    let params = NodeParameters::new().with(names::INCLUDE_LITIGATOR_CHECK, true);

    let out = runner.run(&items, &params.for_items(&items)).await.unwrap();

    assert_eq!(out.len(), 1);
    assert_eq!(out[0].json["is_valid"], true);
    assert_eq!(out[0].correlates_with, 0);

    let received = server.received_requests().await.unwrap();
    assert_eq!(
        received[0].url.query(),
        Some("phone=2069735100&addons=litigator_check")
    );
}

#[tokio::test]
async fn real_contact_posts_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/1.1/real_contact"))
        .and(header("x-api-key", "test-key"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "name": "Jane Doe",
            "phone": "2069735100",
            "postal_code": "98101"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"phone.is_valid": true})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_with_key(Some("test-key"));
    let config = config_for(&server, false);
    let runner = BatchRunner {
        transport: &client,
        events: &NoOpEventSink,
        config: &config,
    };
    let items = vec![Item::new(json!({
        "full_name": "Jane Doe",
        "phone": "2069735100",
        "zip": "98101"
    }))];
    let params = NodeParameters::new()
        .with(names::RESOURCE, "realContact")
        .with(names::NAME_FIELD, "full_name")
        .with(names::POSTAL_CODE_FIELD, "zip");

    let out = runner.run(&items, &params.for_items(&items)).await.unwrap();
    assert_eq!(out[0].json["phone.is_valid"], true);
}

#[tokio::test]
async fn non_2xx_is_reported_with_status_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/3.0/phone_intel"))
        .respond_with(
            ResponseTemplate::new(403).set_body_json(json!({"error": {"message": "Invalid API key"}})),
        )
        .mount(&server)
        .await;

    let client = client_with_key(Some("bad-key"));
    let config = config_for(&server, true);
    let runner = BatchRunner {
        transport: &client,
        events: &NoOpEventSink,
        config: &config,
    };
    let items = vec![Item::new(json!({"phone": "2069735100"}))];
    let params = NodeParameters::new();

    let out = runner.run(&items, &params.for_items(&items)).await.unwrap();

    let cause = out[0].error.as_ref().unwrap();
    assert_eq!(cause.status, Some(403));
    assert_eq!(cause.body.as_ref().unwrap()["error"]["message"], "Invalid API key");
}

#[tokio::test]
async fn missing_credential_never_reaches_the_network() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_with_key(None);
    let base = Url::parse(&server.uri()).unwrap();
    let req = trestle_core::request::PhoneIntelQuery::new("2069735100")
        .into_request(&base)
        .unwrap();

    let err = client.call(req).await.unwrap_err();
    assert!(matches!(err, RemoteError::Credential { .. }));
}

#[tokio::test]
async fn empty_success_body_becomes_empty_object() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let client = client_with_key(Some("k"));
    let base = Url::parse(&server.uri()).unwrap();
    let req = trestle_core::request::PhoneIntelQuery::new("1")
        .into_request(&base)
        .unwrap();

    assert_eq!(client.call(req).await.unwrap(), json!({}));
}

#[tokio::test]
async fn oversized_response_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("x".repeat(64)))
        .mount(&server)
        .await;

    let client = client_with_key(Some("k")).with_max_response_bytes(16);
    let base = Url::parse(&server.uri()).unwrap();
    let req = trestle_core::request::PhoneIntelQuery::new("1")
        .into_request(&base)
        .unwrap();

    let err = client.call(req).await.unwrap_err();
    assert!(matches!(
        err,
        RemoteError::Transport(HttpError::ResponseTooLarge { max_bytes: 16 })
    ));
}

#[tokio::test]
async fn redirects_are_not_followed_with_the_api_key() {
    let api = MockServer::start().await;
    let other = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/3.0/phone_intel"))
        .respond_with(
            ResponseTemplate::new(302)
                .insert_header("Location", format!("{}/collect", other.uri()).as_str()),
        )
        .expect(1)
        .mount(&api)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"followed": true})))
        .expect(0)
        .mount(&other)
        .await;

    let client = client_with_key(Some("secret-key"));
    let base = Url::parse(&api.uri()).unwrap();
    let req = trestle_core::request::PhoneIntelQuery::new("2069735100")
        .into_request(&base)
        .unwrap();

    let err = client.call(req).await.unwrap_err();
    assert_eq!(err.status(), Some(302));
    assert!(other.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn credential_test_passes_on_2xx() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/3.0/phone_intel"))
        .and(query_param("phone", "2069735100"))
        .and(header("x-api-key", "good-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "x"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_with_key(Some("good-key"));
    let base = Url::parse(&server.uri()).unwrap();
    client.test_credential(&base).await.unwrap();
}

#[tokio::test]
async fn credential_test_fails_on_401() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401).set_body_string("unauthorized"))
        .mount(&server)
        .await;

    let client = client_with_key(Some("bad-key"));
    let base = Url::parse(&server.uri()).unwrap();
    let err = client.test_credential(&base).await.unwrap_err();
    assert_eq!(err.status(), Some(401));
}
