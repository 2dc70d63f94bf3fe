//! Authenticated calls to the Trestle API.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value as JsonValue;
use trestle_core::ApiRequest;
use url::Url;

use crate::credentials::TrestleApiCredential;
use crate::executor::http::{HttpClient, HttpError, HttpRequestParts, HttpResponseParts};
use crate::secrets::{SecretError, SecretsProvider};

/// Failure of the remote call, passed through to the output unmodified.
#[derive(Debug, thiserror::Error)]
pub enum RemoteError {
    #[error("failed to resolve credential {credential}: {source}")]
    Credential {
        credential: String,
        #[source]
        source: SecretError,
    },
    #[error("failed to encode request: {0}")]
    Encode(String),
    #[error(transparent)]
    Transport(#[from] HttpError),
    #[error("remote service returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("malformed response body: {0}")]
    MalformedResponse(String),
}

impl RemoteError {
    pub fn status(&self) -> Option<u16> {
        match self {
            RemoteError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Error body as JSON when the service sent JSON, otherwise as a string.
    pub fn body(&self) -> Option<JsonValue> {
        match self {
            RemoteError::Status { body, .. } if !body.is_empty() => Some(
                serde_json::from_str(body).unwrap_or_else(|_| JsonValue::String(body.clone())),
            ),
            _ => None,
        }
    }
}

/// The authenticated request seam the batch loop depends on.
#[async_trait]
pub trait ApiTransport: Send + Sync {
    async fn call(&self, req: ApiRequest) -> Result<JsonValue, RemoteError>;
}

pub struct TrestleClient {
    http: Arc<dyn HttpClient>,
    secrets: Arc<dyn SecretsProvider>,
    credential: String,
    descriptor: TrestleApiCredential,
    timeout: Duration,
    max_response_bytes: usize,
}

impl TrestleClient {
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
    pub const DEFAULT_MAX_RESPONSE_BYTES: usize = 4 * 1024 * 1024;

    pub fn new(
        http: Arc<dyn HttpClient>,
        secrets: Arc<dyn SecretsProvider>,
        credential: impl Into<String>,
    ) -> Self {
        Self {
            http,
            secrets,
            credential: credential.into(),
            descriptor: TrestleApiCredential,
            timeout: Self::DEFAULT_TIMEOUT,
            max_response_bytes: Self::DEFAULT_MAX_RESPONSE_BYTES,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_max_response_bytes(mut self, max_response_bytes: usize) -> Self {
        self.max_response_bytes = max_response_bytes;
        self
    }

    /// Send the fixed test lookup with the configured key. Any 2xx is a pass.
    pub async fn test_credential(&self, base_url: &Url) -> Result<(), RemoteError> {
        let secret = self.resolve_secret().await?;
        let parts = self
            .descriptor
            .test_request(base_url, &secret)
            .map_err(|e| RemoteError::Encode(e.to_string()))?;
        tracing::debug!(credential = %self.credential, url = %base_url, "testing credential");
        let resp = self.send(parts).await?;
        ensure_success(&resp)
    }

    async fn resolve_secret(&self) -> Result<crate::secrets::SecretValue, RemoteError> {
        self.secrets
            .get(&self.credential)
            .await
            .map_err(|source| RemoteError::Credential {
                credential: self.credential.clone(),
                source,
            })
    }

    async fn send(&self, parts: HttpRequestParts) -> Result<HttpResponseParts, RemoteError> {
        Ok(self
            .http
            .send(parts, self.timeout, self.max_response_bytes)
            .await?)
    }
}

#[async_trait]
impl ApiTransport for TrestleClient {
    async fn call(&self, req: ApiRequest) -> Result<JsonValue, RemoteError> {
        let secret = self.resolve_secret().await?;
        let parts =
            HttpRequestParts::from_api_request(&req).map_err(|e| RemoteError::Encode(e.to_string()))?;
        let parts = self.descriptor.authenticate(parts, &secret);

        tracing::debug!(method = %parts.method, path = %parts.url.path(), "calling trestle api");
        let resp = self.send(parts).await?;
        ensure_success(&resp)?;
        parse_body(&resp)
    }
}

fn ensure_success(resp: &HttpResponseParts) -> Result<(), RemoteError> {
    if resp.is_success() {
        return Ok(());
    }
    Err(RemoteError::Status {
        status: resp.status,
        body: String::from_utf8_lossy(&resp.body).into_owned(),
    })
}

/// An empty 2xx body becomes `{}` so every success record has an object to carry.
fn parse_body(resp: &HttpResponseParts) -> Result<JsonValue, RemoteError> {
    if resp.body.iter().all(u8::is_ascii_whitespace) {
        return Ok(JsonValue::Object(Default::default()));
    }
    serde_json::from_slice(&resp.body).map_err(|e| RemoteError::MalformedResponse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn resp(status: u16, body: &str) -> HttpResponseParts {
        HttpResponseParts {
            status,
            headers: BTreeMap::new(),
            body: body.as_bytes().to_vec(),
        }
    }

    #[test]
    fn non_2xx_keeps_status_and_body() {
        let err = ensure_success(&resp(403, r#"{"error":{"message":"Invalid API key"}}"#))
            .unwrap_err();
        assert_eq!(err.status(), Some(403));
        assert_eq!(
            err.body().unwrap()["error"]["message"],
            "Invalid API key"
        );
    }

    #[test]
    fn empty_success_body_is_empty_object() {
        assert_eq!(parse_body(&resp(204, "")).unwrap(), serde_json::json!({}));
    }

    #[test]
    fn invalid_json_is_malformed() {
        assert!(matches!(
            parse_body(&resp(200, "<html>")),
            Err(RemoteError::MalformedResponse(_))
        ));
    }

    #[test]
    fn transport_defaults() {
        assert_eq!(TrestleClient::DEFAULT_TIMEOUT, Duration::from_secs(30));
        assert_eq!(TrestleClient::DEFAULT_MAX_RESPONSE_BYTES, 4 * 1024 * 1024);
    }
}
