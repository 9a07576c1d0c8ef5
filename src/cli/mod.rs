//! Command-line interface wiring for the `readme-cards` binary.
//!
//! Every input can also be supplied through the environment variables a
//! GitHub Actions runner sets for action inputs (`INPUT_CARD`, ...).

use std::time::Duration;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use readme_cards::http::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use readme_cards::{HttpHandlers, RunInputs, run_card};

pub mod actions;
pub mod logging;

use logging::LogFormat;

/// Parsed CLI entrypoint for the `readme-cards` binary.
#[derive(Parser, Debug)]
#[command(
    name = "readme-cards",
    version,
    about = "Render a github-readme-stats card to an SVG file"
)]
pub struct Cli {
    /// Card to render: stats | top-langs | pin | wakatime | gist (case-insensitive).
    #[arg(long, env = "INPUT_CARD")]
    pub card: Option<String>,

    /// Card options as a query string (`username=alice&theme=dark`) or JSON object.
    #[arg(long, env = "INPUT_OPTIONS", allow_hyphen_values = true)]
    pub options: Option<String>,

    /// Output file (default: profile/<card>.svg).
    #[arg(long, env = "INPUT_PATH")]
    pub path: Option<String>,

    /// Username used when the options do not name one.
    #[arg(long, env = "GITHUB_REPOSITORY_OWNER")]
    pub owner: Option<String>,

    /// Base URL of the card service.
    #[arg(long, env = "READMECARDS_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Card service request timeout in seconds.
    #[arg(long, env = "READMECARDS_TIMEOUT", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Log output format.
    #[arg(long, value_enum, default_value_t = LogFormat::Human)]
    pub log_format: LogFormat,
}

/// Render the requested card and publish the output path.
pub fn run(cli: Cli) -> Result<()> {
    let handlers = HttpHandlers::new(&cli.base_url, Duration::from_secs(cli.timeout))
        .context("failed to set up card service client")?;
    let workdir = std::env::current_dir().context("failed to resolve working directory")?;

    let inputs = RunInputs {
        card: cli.card,
        options: cli.options,
        path: cli.path,
        fallback_username: cli.owner,
    };
    let outcome = run_card(&inputs, &handlers, &workdir)?;

    actions::set_output("path", &outcome.path.display().to_string())
}
