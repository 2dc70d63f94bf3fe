use std::path::Path;
use std::sync::Arc;

use trestle_exec::executor::{
    CompositeEventSink, MetricsCollector, StdoutEventSink, TracingEventSink,
};
use trestle_exec::{BatchRunner, ExecConfig};

use crate::exit_codes;
use crate::output::{print_error, print_result, OutputFormat};
use crate::{ClientArgs, EventsArgs, EventsMode, NodeArgs, OutputArgs, SecretsArgs};

use super::config::{
    build_client, build_secrets_provider, credential_name, load_items, load_node_config,
    parse_base_url,
};

pub async fn run_cmd(
    items_path: &Path,
    continue_on_fail: bool,
    node: NodeArgs,
    secrets: SecretsArgs,
    client: ClientArgs,
    events: EventsArgs,
    output: OutputArgs,
) -> i32 {
    match run(items_path, continue_on_fail, &node, &secrets, &client, &events, &output).await {
        Ok(code) | Err(code) => code,
    }
}

async fn run(
    items_path: &Path,
    continue_on_fail: bool,
    node: &NodeArgs,
    secrets: &SecretsArgs,
    client: &ClientArgs,
    events: &EventsArgs,
    output: &OutputArgs,
) -> Result<i32, i32> {
    let node_config = load_node_config(node, output)?;
    let items = load_items(items_path, output)?;
    let base_url = parse_base_url(client.base_url.as_deref(), output)?;

    let provider = build_secrets_provider(secrets, output)?;
    let credential = credential_name(secrets, Some(&node_config));
    let api = build_client(provider, credential, client, output)?;

    let metrics = Arc::new(MetricsCollector::new());
    let mut sink = CompositeEventSink::new();
    sink.add(Box::new(TracingEventSink));
    sink.add(Box::new(metrics.clone()));
    if events.events == EventsMode::Stdout {
        sink.add(Box::new(StdoutEventSink));
    }

    let config = ExecConfig {
        base_url,
        continue_on_fail: continue_on_fail || node_config.continue_on_fail,
    };
    let runner = BatchRunner {
        transport: &api,
        events: &sink,
        config: &config,
    };
    let params = node_config.parameters.for_items(&items);

    let code = match runner.run(&items, &params).await {
        Ok(records) => {
            print_result(output.format, output.quiet, &records);
            exit_codes::SUCCESS
        }
        Err(aborted) => {
            print_result(output.format, output.quiet, &aborted.completed);
            print_error(output.format, output.quiet, &aborted.to_string());
            exit_codes::RUN_FAILED
        }
    };

    if output.format == OutputFormat::Text && !output.quiet {
        let m = metrics.snapshot().await;
        eprintln!(
            "{} items: {} records ({} succeeded, {} failed), {} skipped",
            m.items_total,
            m.emitted(),
            m.succeeded,
            m.failed,
            m.skipped
        );
    }
    Ok(code)
}
