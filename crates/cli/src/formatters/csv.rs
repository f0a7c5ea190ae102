//! CSV formatter implementation.
//!
//! Responsibilities:
//! - Format records as RFC 4180 compliant CSV with a header row.
//!
//! Invariants:
//! - Columns are fixed per record type so rows from different runs concatenate.

use anyhow::{Context, Result};
use pushover_client::CommandRecord;

use crate::formatters::{DEFAULT_MISSING_VALUE, Formatter, LimitsOutput};

/// CSV formatter.
pub struct CsvFormatter;

fn write_rows(header: &[&str], row: &[&str]) -> Result<String> {
    let mut buffer = Vec::new();
    {
        let mut w = ::csv::Writer::from_writer(&mut buffer);
        w.write_record(header)
            .context("Failed to write CSV headers")?;
        w.write_record(row).context("Failed to write CSV record")?;
        w.flush().context("Failed to flush CSV writer")?;
    }
    String::from_utf8(buffer).context("CSV output was not valid UTF-8")
}

impl Formatter for CsvFormatter {
    fn format_command_record(&self, record: &CommandRecord) -> Result<String> {
        let header = ["status", "account", "request_id", "api_status", "error"];
        match record {
            CommandRecord::Success {
                account,
                request_id,
                api_status,
            } => write_rows(
                &header,
                &[
                    "success",
                    account.as_str(),
                    request_id.as_str(),
                    api_status.as_str(),
                    DEFAULT_MISSING_VALUE,
                ],
            ),
            CommandRecord::Error { account, error } => write_rows(
                &header,
                &[
                    "error",
                    account.as_str(),
                    DEFAULT_MISSING_VALUE,
                    DEFAULT_MISSING_VALUE,
                    error.as_str(),
                ],
            ),
        }
    }

    fn format_limits(&self, limits: &LimitsOutput) -> Result<String> {
        write_rows(
            &["account", "limit", "remaining", "reset", "reset_at"],
            &[
                limits.account.as_str(),
                limits.limit.to_string().as_str(),
                limits.remaining.to_string().as_str(),
                limits.reset.to_string().as_str(),
                limits.reset_at.as_deref().unwrap_or(DEFAULT_MISSING_VALUE),
            ],
        )
    }
}
