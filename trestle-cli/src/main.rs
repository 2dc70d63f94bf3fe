use clap::{ArgAction, Parser};
use tracing_subscriber::EnvFilter;

mod args;
mod cmd;
mod commands;
mod exit_codes;
mod output;

pub use args::*;
use commands::Command;

#[derive(Debug, Parser)]
#[command(name = "trestle", version, about = "Trestle phone validation and real contact batches")]
struct Cli {
    /// Raise log verbosity (-v debug, -vv trace). `RUST_LOG` takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("error: failed to create tokio runtime: {e}");
            std::process::exit(exit_codes::RUNTIME_ERROR);
        }
    };

    let exit_code = rt.block_on(run_command(cli.command));
    std::process::exit(exit_code);
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run_command(command: Command) -> i32 {
    match command {
        Command::Run {
            items,
            continue_on_fail,
            node,
            secrets,
            client,
            events,
            output,
        } => {
            cmd::run::run_cmd(&items, continue_on_fail, node, secrets, client, events, output)
                .await
        }
        Command::Preview {
            items,
            base_url,
            node,
            output,
        } => cmd::preview::preview_cmd(&items, base_url.as_deref(), node, output).await,
        Command::CheckCredential {
            secrets,
            client,
            output,
        } => cmd::check_credential::check_credential_cmd(secrets, client, output).await,
    }
}
