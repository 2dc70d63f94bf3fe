use std::path::PathBuf;

use clap::Args;

use crate::output::OutputFormat;

#[derive(Debug, Args, Clone)]
pub struct OutputArgs {
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,
    #[arg(long, short, global = true)]
    pub quiet: bool,
}

#[derive(Debug, Args, Clone)]
pub struct NodeArgs {
    /// Node config document (JSON or YAML).
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Override one parameter; the value is read as JSON when it parses, otherwise as a string.
    #[arg(long = "set", value_name = "NAME=VALUE")]
    pub set_params: Vec<String>,
}

#[derive(Debug, Args, Clone)]
pub struct SecretsArgs {
    /// `env` or `file:<dir>`.
    #[arg(long, default_value = "env")]
    pub secrets: String,
    /// Credential name; falls back to the node config, then `TRESTLE_API_KEY`.
    #[arg(long)]
    pub credential: Option<String>,
}

#[derive(Debug, Args, Clone)]
pub struct ClientArgs {
    #[arg(long)]
    pub base_url: Option<String>,
    /// Request timeout in milliseconds.
    #[arg(long, default_value_t = 30000)]
    pub timeout: u64,
    #[arg(long, default_value_t = 4_194_304)]
    pub max_response_bytes: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum EventsMode {
    None,
    Stdout,
}

#[derive(Debug, Args, Clone)]
pub struct EventsArgs {
    /// Also write lifecycle events as JSON lines to stdout.
    #[arg(long, value_enum, default_value_t = EventsMode::None)]
    pub events: EventsMode,
}
