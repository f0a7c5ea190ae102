//! Output formatters for CLI commands.
//!
//! Responsibilities:
//! - Provide the table, JSON, and CSV output formats.
//! - Implement the `Formatter` trait for send records and application limits.
//!
//! Does NOT handle:
//! - Direct printing to stdout (returns formatted strings).
//!
//! Invariants:
//! - Machine-readable formats (JSON, CSV) always produce parseable output.
//! - Missing values render as `N/A` in table and CSV output.

use anyhow::Result;
use pushover_client::{AppLimits, CommandRecord};
use serde::Serialize;

mod csv;
mod json;
mod table;

pub use self::csv::CsvFormatter;
pub use self::json::JsonFormatter;
pub use self::table::TableFormatter;

/// Representation for missing values in table and CSV output.
pub const DEFAULT_MISSING_VALUE: &str = "N/A";

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
}

impl OutputFormat {
    /// Parse from string.
    pub fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "table" => Ok(OutputFormat::Table),
            "csv" => Ok(OutputFormat::Csv),
            _ => anyhow::bail!(
                "Invalid output format: {}. Valid options: json, table, csv",
                s
            ),
        }
    }
}

/// Application limits output structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LimitsOutput {
    pub account: String,
    pub limit: u64,
    pub remaining: u64,
    pub reset: i64,
    pub reset_at: Option<String>,
}

impl LimitsOutput {
    pub fn new(account: &str, limits: &AppLimits) -> Self {
        Self {
            account: account.to_string(),
            limit: limits.limit,
            remaining: limits.remaining,
            reset: limits.reset,
            reset_at: limits.reset_at().map(|at| at.to_rfc3339()),
        }
    }
}

/// Formatter trait for different output types.
pub trait Formatter {
    /// Format the outcome of a send command.
    fn format_command_record(&self, record: &CommandRecord) -> Result<String>;

    /// Format application limits.
    fn format_limits(&self, limits: &LimitsOutput) -> Result<String>;
}

/// Get a formatter for the specified output format.
pub fn get_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Table => Box::new(TableFormatter),
        OutputFormat::Csv => Box::new(CsvFormatter),
    }
}
