use serde::Serialize;

use crate::exit_codes;
use crate::output::{print_error, print_result};
use crate::{ClientArgs, OutputArgs, SecretsArgs};

use super::config::{build_client, build_secrets_provider, credential_name, parse_base_url};

#[derive(Serialize)]
struct CheckResult {
    credential: String,
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

pub async fn check_credential_cmd(
    secrets: SecretsArgs,
    client: ClientArgs,
    output: OutputArgs,
) -> i32 {
    let base_url = match parse_base_url(client.base_url.as_deref(), &output) {
        Ok(u) => u,
        Err(code) => return code,
    };
    let provider = match build_secrets_provider(&secrets, &output) {
        Ok(p) => p,
        Err(code) => return code,
    };
    let credential = credential_name(&secrets, None);
    let api = match build_client(provider, credential.clone(), &client, &output) {
        Ok(c) => c,
        Err(code) => return code,
    };

    match api.test_credential(&base_url).await {
        Ok(()) => {
            print_result(
                output.format,
                output.quiet,
                &CheckResult {
                    credential,
                    ok: true,
                    status: None,
                    error: None,
                },
            );
            exit_codes::SUCCESS
        }
        Err(e) => {
            tracing::warn!(%credential, error = %e, "credential test failed");
            print_result(
                output.format,
                output.quiet,
                &CheckResult {
                    credential,
                    ok: false,
                    status: e.status(),
                    error: Some(e.to_string()),
                },
            );
            print_error(output.format, output.quiet, "credential test failed");
            exit_codes::RUN_FAILED
        }
    }
}
