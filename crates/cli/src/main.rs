//! ta-pushover - Pushover notifications for Splunk.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Install the tracing subscriber (stderr, text or JSON).
//! - Load configuration and run the modular alert or a one-shot command.
//! - Map failures to structured exit codes.
//!
//! Does NOT handle:
//! - Payload validation or API calls (see `crates/client`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing to allow `.env` to provide clap defaults.
//! - Nothing but command output is written to stdout; logs go to stderr.

mod args;
mod commands;
mod dispatch;
mod error;
mod formatters;
mod host;

use anyhow::{Context, Result};
use args::Cli;
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use pushover_config::{Config, ConfigLoader};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn init_tracing(log_format: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format == "json" {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut loader = ConfigLoader::new();

    // Blank/whitespace-only values are ignored to allow fallback to env var
    if let Some(ref path) = cli.config_path
        && !path.to_string_lossy().trim().is_empty()
    {
        loader = loader.with_config_path(path.clone());
    }

    loader = loader
        .from_env()
        .context("Failed to load configuration from environment")?
        .from_file()
        .context("Failed to load configuration file")?;

    if let Some(ref url) = cli.api_url {
        loader = loader.with_api_url(url.clone());
    }
    if let Some(timeout_secs) = cli.timeout {
        loader = loader.with_timeout(std::time::Duration::from_secs(timeout_secs));
    }

    loader.build().context("Failed to build configuration")
}

#[tokio::main]
async fn main() {
    // Load .env file BEFORE CLI parsing so clap env defaults can read .env values
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();
    init_tracing(&cli.log_format);

    let result = match load_config(&cli) {
        Ok(config) => run_command(cli, config).await,
        Err(e) => Err(e),
    };

    let exit_code = match result {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}
