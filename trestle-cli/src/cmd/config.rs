use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use serde_json::Value as JsonValue;
use trestle_core::{
    parse_items_str, parse_node_config_str, DocumentFormat, Item, NodeConfig, DEFAULT_BASE_URL,
};
use trestle_exec::executor::ReqwestHttpClient;
use trestle_exec::secrets::{
    EnvSecretsProvider, FileSecretsProvider, SecretsProvider, DEFAULT_CREDENTIAL,
};
use trestle_exec::TrestleClient;
use url::Url;

use crate::exit_codes;
use crate::output::print_error;
use crate::{ClientArgs, NodeArgs, OutputArgs, SecretsArgs};

fn read_file(path: &Path, what: &str, output: &OutputArgs) -> Result<String, i32> {
    std::fs::read_to_string(path).map_err(|e| {
        print_error(
            output.format,
            output.quiet,
            &format!("failed to read {what} {}: {e}", path.display()),
        );
        exit_codes::RUNTIME_ERROR
    })
}

pub fn load_items(path: &Path, output: &OutputArgs) -> Result<Vec<Item>, i32> {
    let content = read_file(path, "items", output)?;
    parse_items_str(&content, DocumentFormat::Auto).map_err(|e| {
        print_error(output.format, output.quiet, &format!("invalid items document: {e}"));
        exit_codes::VALIDATION_FAILED
    })
}

/// Node config from `--config` (or defaults) with `--set` overrides applied.
pub fn load_node_config(node: &NodeArgs, output: &OutputArgs) -> Result<NodeConfig, i32> {
    let mut config = match &node.config {
        None => NodeConfig::default(),
        Some(path) => {
            let content = read_file(path, "config", output)?;
            parse_node_config_str(&content, DocumentFormat::Auto).map_err(|e| {
                print_error(output.format, output.quiet, &format!("invalid node config: {e}"));
                exit_codes::VALIDATION_FAILED
            })?
        }
    };

    for s in &node.set_params {
        let Some((name, raw)) = s.split_once('=') else {
            print_error(
                output.format,
                output.quiet,
                &format!("invalid --set {s:?}: expected NAME=VALUE"),
            );
            return Err(exit_codes::VALIDATION_FAILED);
        };
        config.parameters.set(name.trim(), parse_set_value(raw));
    }
    Ok(config)
}

fn parse_set_value(raw: &str) -> JsonValue {
    serde_json::from_str(raw).unwrap_or_else(|_| JsonValue::String(raw.to_string()))
}

pub fn parse_base_url(base_url: Option<&str>, output: &OutputArgs) -> Result<Url, i32> {
    let raw = base_url.unwrap_or(DEFAULT_BASE_URL);
    Url::parse(raw).map_err(|e| {
        print_error(output.format, output.quiet, &format!("invalid base URL {raw:?}: {e}"));
        exit_codes::VALIDATION_FAILED
    })
}

pub fn build_secrets_provider(
    secrets: &SecretsArgs,
    output: &OutputArgs,
) -> Result<Arc<dyn SecretsProvider>, i32> {
    if secrets.secrets == "env" {
        return Ok(Arc::new(EnvSecretsProvider::default()));
    }
    if let Some(dir) = secrets.secrets.strip_prefix("file:") {
        if dir.is_empty() {
            print_error(output.format, output.quiet, "--secrets file: needs a directory");
            return Err(exit_codes::VALIDATION_FAILED);
        }
        return Ok(Arc::new(FileSecretsProvider::new(dir)));
    }
    print_error(
        output.format,
        output.quiet,
        &format!("unknown secrets provider {:?} (expected env or file:<dir>)", secrets.secrets),
    );
    Err(exit_codes::VALIDATION_FAILED)
}

/// `--credential`, then the node config's credential, then the default name.
pub fn credential_name(secrets: &SecretsArgs, config: Option<&NodeConfig>) -> String {
    secrets
        .credential
        .clone()
        .or_else(|| config.and_then(|c| c.credential.clone()))
        .unwrap_or_else(|| DEFAULT_CREDENTIAL.to_string())
}

pub fn build_client(
    secrets: Arc<dyn SecretsProvider>,
    credential: String,
    client: &ClientArgs,
    output: &OutputArgs,
) -> Result<TrestleClient, i32> {
    let http = ReqwestHttpClient::new().map_err(|e| {
        print_error(output.format, output.quiet, &e.to_string());
        exit_codes::RUNTIME_ERROR
    })?;
    Ok(TrestleClient::new(Arc::new(http), secrets, credential)
        .with_timeout(Duration::from_millis(client.timeout))
        .with_max_response_bytes(client.max_response_bytes))
}
