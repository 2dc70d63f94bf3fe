use std::sync::LazyLock;

use trestle_core::DEFAULT_BASE_URL;
use url::Url;

static DEFAULT_BASE: LazyLock<Url> =
    LazyLock::new(|| Url::parse(DEFAULT_BASE_URL).expect("valid default base URL"));

#[derive(Debug, Clone)]
pub struct ExecConfig {
    pub base_url: Url,
    /// Tolerant mode: failed items become error records and the batch carries on.
    pub continue_on_fail: bool,
}

impl Default for ExecConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE.clone(),
            continue_on_fail: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_strict_mode_against_the_public_api() {
        let c = ExecConfig::default();
        assert_eq!(c.base_url.as_str(), "https://api.trestleiq.com/");
        assert!(!c.continue_on_fail);
    }
}
