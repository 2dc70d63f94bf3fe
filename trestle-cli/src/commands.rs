use std::path::PathBuf;

use clap::Subcommand;

use crate::args::*;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Validate every item against the Trestle API and print the result records.
    Run {
        /// Items document (JSON or YAML).
        items: PathBuf,
        #[arg(long)]
        continue_on_fail: bool,
        #[command(flatten)]
        node: NodeArgs,
        #[command(flatten)]
        secrets: SecretsArgs,
        #[command(flatten)]
        client: ClientArgs,
        #[command(flatten)]
        events: EventsArgs,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Show the request each item would send, without calling the API.
    Preview {
        items: PathBuf,
        #[arg(long)]
        base_url: Option<String>,
        #[command(flatten)]
        node: NodeArgs,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Send the fixed test lookup with the configured key.
    CheckCredential {
        #[command(flatten)]
        secrets: SecretsArgs,
        #[command(flatten)]
        client: ClientArgs,
        #[command(flatten)]
        output: OutputArgs,
    },
}
