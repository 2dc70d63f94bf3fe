use std::collections::BTreeMap;
use std::time::Duration;

use async_trait::async_trait;
use trestle_core::{ApiRequest, BuildError};

#[derive(Debug, Clone)]
pub struct HttpRequestParts {
    pub method: String,
    pub url: url::Url,
    pub headers: BTreeMap<String, String>,
    pub body: Vec<u8>,
}

impl HttpRequestParts {
    pub fn from_api_request(req: &ApiRequest) -> Result<Self, BuildError> {
        let body = match &req.body {
            Some(v) => serde_json::to_vec(v).map_err(|e| BuildError::Body(e.to_string()))?,
            None => Vec::new(),
        };
        Ok(Self {
            method: req.method.as_str().to_string(),
            url: req.url.clone(),
            headers: req.headers.clone(),
            body,
        })
    }
}

#[derive(Debug, Clone)]
pub struct HttpResponseParts {
    pub status: u16,
    pub headers: BTreeMap<String, String>,
    pub body: Vec<u8>,
}

impl HttpResponseParts {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum HttpError {
    #[error("timeout")]
    Timeout,
    #[error("connect/dns/tls error: {0}")]
    Network(String),
    #[error("response too large (>{max_bytes} bytes)")]
    ResponseTooLarge { max_bytes: usize },
    #[error("http error: {0}")]
    Other(String),
}

/// Raw transport. Knows nothing about credentials or the Trestle API.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn send(
        &self,
        req: HttpRequestParts,
        timeout: Duration,
        max_response_bytes: usize,
    ) -> Result<HttpResponseParts, HttpError>;
}

pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    pub fn new() -> Result<Self, HttpError> {
        // Redirects are never followed, so x-api-key only goes to the configured host.
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .user_agent(concat!("trestle-exec/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| HttpError::Other(format!("failed to create HTTP client: {e}")))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn send(
        &self,
        req: HttpRequestParts,
        timeout: Duration,
        max_response_bytes: usize,
    ) -> Result<HttpResponseParts, HttpError> {
        let method = reqwest::Method::from_bytes(req.method.as_bytes())
            .map_err(|e| HttpError::Other(e.to_string()))?;
        let mut rb = self.client.request(method, req.url).timeout(timeout);

        for (k, v) in req.headers {
            rb = rb.header(k, v);
        }
        if !req.body.is_empty() {
            rb = rb.body(req.body);
        }

        let resp = rb.send().await.map_err(map_reqwest_error)?;
        let status = resp.status().as_u16();

        if resp
            .content_length()
            .is_some_and(|len| len > max_response_bytes as u64)
        {
            return Err(HttpError::ResponseTooLarge {
                max_bytes: max_response_bytes,
            });
        }

        let mut headers = BTreeMap::new();
        for (k, v) in resp.headers().iter() {
            if let Ok(s) = v.to_str() {
                headers.insert(k.to_string(), s.to_string());
            }
        }

        let body = resp.bytes().await.map_err(map_reqwest_error)?;
        if body.len() > max_response_bytes {
            return Err(HttpError::ResponseTooLarge {
                max_bytes: max_response_bytes,
            });
        }

        Ok(HttpResponseParts {
            status,
            headers,
            body: body.to_vec(),
        })
    }
}

fn map_reqwest_error(e: reqwest::Error) -> HttpError {
    if e.is_timeout() {
        return HttpError::Timeout;
    }
    if e.is_connect() || e.is_request() {
        return HttpError::Network(e.to_string());
    }
    HttpError::Other(e.to_string())
}
