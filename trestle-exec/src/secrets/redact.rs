use std::collections::BTreeMap;

use crate::credentials::API_KEY_HEADER;

pub const REDACTED: &str = "<redacted>";

const ALWAYS_REDACT: &[&str] = &[API_KEY_HEADER, "authorization", "cookie", "set-cookie"];

/// Copy of `headers` safe to log or print.
pub fn redact_headers(headers: &BTreeMap<String, String>) -> BTreeMap<String, String> {
    headers
        .iter()
        .map(|(k, v)| {
            if ALWAYS_REDACT.iter().any(|h| k.eq_ignore_ascii_case(h)) {
                (k.clone(), REDACTED.to_string())
            } else {
                (k.clone(), v.clone())
            }
        })
        .collect()
}
