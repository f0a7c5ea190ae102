//! JSON formatter implementation.

use anyhow::Result;
use pushover_client::CommandRecord;

use crate::formatters::{Formatter, LimitsOutput};

/// JSON formatter.
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format_command_record(&self, record: &CommandRecord) -> Result<String> {
        Ok(format!("{}\n", serde_json::to_string_pretty(record)?))
    }

    fn format_limits(&self, limits: &LimitsOutput) -> Result<String> {
        Ok(format!("{}\n", serde_json::to_string_pretty(limits)?))
    }
}
