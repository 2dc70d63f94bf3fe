use serde::Serialize;
use url::Url;

use super::{endpoint_url, ApiRequest, REAL_CONTACT_PATH};
use crate::error::{BuildError, MissingFieldError};
use crate::params::{names, ParameterResolver};
use crate::types::Item;

pub const EMAIL_DELIVERABILITY_ADDON: &str = "email_deliverability";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RealContactBody {
    pub name: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub addons: Option<String>,
}

impl RealContactBody {
    /// Name is checked before phone, so an item missing both reports the name field.
    pub fn from_item(
        params: &dyn ParameterResolver,
        item: &Item,
        index: usize,
    ) -> Result<Self, BuildError> {
        let required = |param: &str, default: &str| -> Result<String, BuildError> {
            let field = params.string(param, index, default)?;
            item.text_field(&field)
                .ok_or_else(|| MissingFieldError::new(field, index).into())
        };
        let optional = |param: &str, default: &str| -> Result<Option<String>, BuildError> {
            let field = params.string(param, index, default)?;
            Ok(item.text_field(&field))
        };

        let name = required(names::NAME_FIELD, "name")?;
        let phone = required(names::PHONE_FIELD, "phone")?;

        let email_deliverability =
            params.boolean(names::INCLUDE_EMAIL_DELIVERABILITY, index, false)?;
        let litigator_check = params.boolean(names::INCLUDE_LITIGATOR_CHECK, index, false)?;

        Ok(Self {
            name,
            phone,
            email: optional(names::EMAIL_FIELD, "email")?,
            ip: optional(names::IP_ADDRESS_FIELD, "ip_address")?,
            address: optional(names::ADDRESS_FIELD, "address")?,
            city: optional(names::CITY_FIELD, "city")?,
            state: optional(names::STATE_FIELD, "state")?,
            postal_code: optional(names::POSTAL_CODE_FIELD, "postal_code")?,
            addons: addons(email_deliverability, litigator_check),
        })
    }

    pub fn into_request(self, base_url: &Url) -> Result<ApiRequest, BuildError> {
        let url = endpoint_url(base_url, REAL_CONTACT_PATH)?;
        let body = serde_json::to_value(&self)
            .map_err(|e| BuildError::Body(e.to_string()))?;
        Ok(ApiRequest::post_json(url, body))
    }
}

fn addons(email_deliverability: bool, litigator_check: bool) -> Option<String> {
    let mut list = Vec::new();
    if email_deliverability {
        list.push(EMAIL_DELIVERABILITY_ADDON);
    }
    if litigator_check {
        list.push(super::phone_intel::LITIGATOR_CHECK_ADDON);
    }
    if list.is_empty() {
        None
    } else {
        Some(list.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn addons_join_in_fixed_order() {
        assert_eq!(addons(false, false), None);
        assert_eq!(addons(true, false).as_deref(), Some("email_deliverability"));
        assert_eq!(addons(false, true).as_deref(), Some("litigator_check"));
        assert_eq!(
            addons(true, true).as_deref(),
            Some("email_deliverability,litigator_check")
        );
    }
}
