use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use super::ParameterResolver;
use crate::error::ParameterError;
use crate::expressions::{looks_like_expression, looks_like_template, parse_item_expr, parse_template};
use crate::types::Item;

/// Parameter values as configured on the node, before per-item evaluation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeParameters {
    values: BTreeMap<String, JsonValue>,
}

impl NodeParameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<JsonValue>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&JsonValue> {
        self.values.get(name)
    }

    /// Bind to the batch so expressions can see the item they are evaluated for.
    pub fn for_items<'a>(&'a self, items: &'a [Item]) -> ItemScopedParameters<'a> {
        ItemScopedParameters {
            params: self,
            items,
        }
    }
}

pub struct ItemScopedParameters<'a> {
    params: &'a NodeParameters,
    items: &'a [Item],
}

impl ItemScopedParameters<'_> {
    fn item(&self, index: usize) -> Result<&Item, ParameterError> {
        self.items.get(index).ok_or(ParameterError::ItemOutOfRange {
            index,
            len: self.items.len(),
        })
    }
}

impl ParameterResolver for ItemScopedParameters<'_> {
    fn resolve(&self, name: &str, index: usize) -> Result<Option<JsonValue>, ParameterError> {
        let Some(raw) = self.params.get(name) else {
            return Ok(None);
        };
        let JsonValue::String(s) = raw else {
            return Ok(Some(raw.clone()));
        };

        if looks_like_expression(s) {
            let expr = parse_item_expr(s).map_err(|source| ParameterError::Expression {
                name: name.to_string(),
                source,
            })?;
            let item = self.item(index)?;
            return Ok(Some(expr.evaluate(&item.json, index)));
        }

        if looks_like_template(s) {
            let tpl = parse_template(s).map_err(|source| ParameterError::Template {
                name: name.to_string(),
                source,
            })?;
            let item = self.item(index)?;
            return Ok(Some(JsonValue::String(tpl.render(&item.json, index))));
        }

        Ok(Some(raw.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::names;
    use serde_json::json;

    #[test]
    fn expressions_vary_per_item() {
        let items = vec![
            Item::new(json!({"country": "US", "check": true})),
            Item::new(json!({"country": "CA", "check": false})),
        ];
        let params = NodeParameters::new()
            .with(names::COUNTRY_HINT, "$json.country")
            .with(names::INCLUDE_LITIGATOR_CHECK, "$json.check")
            .with(names::PHONE_FIELD, "phone");
        let r = params.for_items(&items);

        assert_eq!(r.string(names::COUNTRY_HINT, 0, "").unwrap(), "US");
        assert_eq!(r.string(names::COUNTRY_HINT, 1, "").unwrap(), "CA");
        assert!(r.boolean(names::INCLUDE_LITIGATOR_CHECK, 0, false).unwrap());
        assert!(!r.boolean(names::INCLUDE_LITIGATOR_CHECK, 1, false).unwrap());
        assert_eq!(r.string(names::PHONE_FIELD, 1, "").unwrap(), "phone");
        assert_eq!(r.resolve(names::NAME_FIELD, 0).unwrap(), None);
    }

    #[test]
    fn templates_render_to_text() {
        let items = vec![Item::new(json!({"kind": "mobile"}))];
        let params = NodeParameters::new().with(names::PHONE_FIELD, "{ $json.kind }_phone");
        let r = params.for_items(&items);
        assert_eq!(r.string(names::PHONE_FIELD, 0, "").unwrap(), "mobile_phone");
    }

    #[test]
    fn bad_expression_names_the_parameter() {
        let items = vec![Item::new(json!({}))];
        let params = NodeParameters::new().with(names::COUNTRY_HINT, "$env.HOME");
        let err = params
            .for_items(&items)
            .resolve(names::COUNTRY_HINT, 0)
            .unwrap_err();
        assert!(err.to_string().contains("countryHint"));
    }

    #[test]
    fn expression_past_the_last_item_is_out_of_range() {
        let params = NodeParameters::new().with(names::COUNTRY_HINT, "$json.country");
        let err = params.for_items(&[]).resolve(names::COUNTRY_HINT, 0).unwrap_err();
        assert_eq!(err, ParameterError::ItemOutOfRange { index: 0, len: 0 });
    }
}
