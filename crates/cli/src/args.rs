//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not load configuration (see `main()`).

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ta-pushover")]
#[command(about = "Send Pushover notifications from Splunk alerts and searches", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  ta-pushover alert --execute < payload.json\n  ta-pushover send --account prod --message 'Disk full on web01' --priority 1\n  ta-pushover --output json limits --account prod\n"
)]
pub struct Cli {
    /// Base URL of the Pushover API (e.g., https://api.pushover.net/1)
    #[arg(long, global = true, env = "PUSHOVER_API_URL")]
    pub api_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, env = "PUSHOVER_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Path to a custom configuration file (overrides default location).
    ///
    /// Can also be set via PUSHOVER_CONFIG_PATH environment variable.
    #[arg(long, global = true, env = "PUSHOVER_CONFIG_PATH", value_name = "FILE")]
    pub config_path: Option<PathBuf>,

    /// Output format (table, json, csv)
    #[arg(short, long, global = true, default_value = "table")]
    pub output: String,

    /// Log format written to stderr (text, json)
    #[arg(long, global = true, default_value = "text", value_parser = ["text", "json"])]
    pub log_format: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run as a Splunk modular alert action (payload JSON on stdin)
    Alert {
        /// Execution mode flag passed by Splunk
        #[arg(long)]
        execute: bool,
    },

    /// Send a single notification
    Send {
        /// Account whose credentials are used
        #[arg(short, long)]
        account: String,

        /// Message body
        #[arg(short, long)]
        message: String,

        /// Message title
        #[arg(short, long)]
        title: Option<String>,

        /// Supplementary URL
        #[arg(long)]
        url: Option<String>,

        /// Title for the supplementary URL
        #[arg(long)]
        url_title: Option<String>,

        /// Priority from -2 (lowest) to 2 (emergency)
        #[arg(short, long, default_value = "0", allow_hyphen_values = true)]
        priority: i64,

        /// Notification sound name
        #[arg(short, long)]
        sound: Option<String>,
    },

    /// Show the monthly message limits of an account's application
    Limits {
        /// Account whose application token is queried
        #[arg(short, long)]
        account: String,
    },
}
