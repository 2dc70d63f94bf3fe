//! The Trestle API credential: a single API key sent in a static header.

use trestle_core::request::PhoneIntelQuery;
use trestle_core::BuildError;
use url::Url;

use crate::executor::http::HttpRequestParts;
use crate::secrets::SecretValue;

pub const API_KEY_HEADER: &str = "x-api-key";

/// Phone number the credential test looks up.
pub const TEST_PHONE: &str = "2069735100";

#[derive(Debug, Clone, Copy, Default)]
pub struct TrestleApiCredential;

impl TrestleApiCredential {
    /// Set `x-api-key` to the secret. Other headers are left untouched; an existing api key
    /// header in a different case is replaced rather than duplicated.
    pub fn authenticate(&self, mut req: HttpRequestParts, secret: &SecretValue) -> HttpRequestParts {
        req.headers
            .retain(|k, _| !k.eq_ignore_ascii_case(API_KEY_HEADER));
        req.headers
            .insert(API_KEY_HEADER.to_string(), secret.expose().to_string());
        req
    }

    /// Fixed phone lookup used to check a key. Success is any 2xx; the body is not inspected.
    pub fn test_request(
        &self,
        base_url: &Url,
        secret: &SecretValue,
    ) -> Result<HttpRequestParts, BuildError> {
        let api = PhoneIntelQuery::new(TEST_PHONE).into_request(base_url)?;
        let parts = HttpRequestParts::from_api_request(&api)?;
        Ok(self.authenticate(parts, secret))
    }
}
