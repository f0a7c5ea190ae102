//! Table formatter implementation.
//!
//! Single records render as aligned `Label: value` lines.

use anyhow::Result;
use pushover_client::CommandRecord;

use crate::formatters::{DEFAULT_MISSING_VALUE, Formatter, LimitsOutput};

/// Table formatter.
pub struct TableFormatter;

fn push_row(output: &mut String, label: &str, value: &str) {
    output.push_str(&format!("{:<11} {}\n", format!("{}:", label), value));
}

impl Formatter for TableFormatter {
    fn format_command_record(&self, record: &CommandRecord) -> Result<String> {
        let mut output = String::new();
        match record {
            CommandRecord::Success {
                account,
                request_id,
                api_status,
            } => {
                push_row(&mut output, "Status", "success");
                push_row(&mut output, "Account", account);
                push_row(&mut output, "Request ID", request_id);
                push_row(&mut output, "API Status", api_status);
            }
            CommandRecord::Error { account, error } => {
                push_row(&mut output, "Status", "error");
                push_row(&mut output, "Account", account);
                push_row(&mut output, "Error", error);
            }
        }
        Ok(output)
    }

    fn format_limits(&self, limits: &LimitsOutput) -> Result<String> {
        let mut output = String::new();
        push_row(&mut output, "Account", &limits.account);
        push_row(&mut output, "Limit", &limits.limit.to_string());
        push_row(&mut output, "Remaining", &limits.remaining.to_string());
        push_row(
            &mut output,
            "Resets at",
            limits.reset_at.as_deref().unwrap_or(DEFAULT_MISSING_VALUE),
        );
        Ok(output)
    }
}
