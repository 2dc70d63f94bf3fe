use url::Url;

use super::{endpoint_url, ApiRequest, PHONE_INTEL_PATH};
use crate::error::{BuildError, MissingFieldError};
use crate::params::{names, ParameterResolver};
use crate::types::Item;

pub const LITIGATOR_CHECK_ADDON: &str = "litigator_check";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneIntelQuery {
    pub phone: String,
    pub country_hint: Option<String>,
    pub litigator_check: bool,
}

impl PhoneIntelQuery {
    pub fn new(phone: impl Into<String>) -> Self {
        Self {
            phone: phone.into(),
            country_hint: None,
            litigator_check: false,
        }
    }

    pub fn from_item(
        params: &dyn ParameterResolver,
        item: &Item,
        index: usize,
    ) -> Result<Self, BuildError> {
        let phone_field = params.string(names::PHONE_FIELD, index, "phone")?;
        let phone = item
            .text_field(&phone_field)
            .ok_or_else(|| MissingFieldError::new(&phone_field, index))?;
        let country_hint = params.string(names::COUNTRY_HINT, index, "")?;
        let litigator_check = params.boolean(names::INCLUDE_LITIGATOR_CHECK, index, false)?;

        Ok(Self {
            phone,
            country_hint: Some(country_hint).filter(|c| !c.is_empty()),
            litigator_check,
        })
    }

    /// `phone`, then `phone.country_hint`, then `addons`; values percent-encoded.
    pub fn to_query_string(&self) -> String {
        let mut q = format!("phone={}", urlencoding::encode(&self.phone));
        if let Some(hint) = &self.country_hint {
            q.push_str("&phone.country_hint=");
            q.push_str(&urlencoding::encode(hint));
        }
        if self.litigator_check {
            q.push_str("&addons=");
            q.push_str(LITIGATOR_CHECK_ADDON);
        }
        q
    }

    pub fn into_request(self, base_url: &Url) -> Result<ApiRequest, BuildError> {
        let mut url = endpoint_url(base_url, PHONE_INTEL_PATH)?;
        url.set_query(Some(&self.to_query_string()));
        Ok(ApiRequest::get(url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_order_is_phone_hint_addons() {
        let q = PhoneIntelQuery {
            phone: "+1 206-973-5100".to_string(),
            country_hint: Some("US".to_string()),
            litigator_check: true,
        };
        assert_eq!(
            q.to_query_string(),
            "phone=%2B1%20206-973-5100&phone.country_hint=US&addons=litigator_check"
        );
    }
}
