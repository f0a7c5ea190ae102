//! Limits command implementation.

use anyhow::{Context, Result};
use pushover_client::alert::credentials_for;
use pushover_config::{Config, CredentialStore};
use tracing::info;

use crate::formatters::{LimitsOutput, OutputFormat, get_formatter};

pub async fn run(config: Config, account: &str, output_format: &str) -> Result<()> {
    let format = OutputFormat::from_str(output_format)?;
    let client = crate::commands::build_client_from_config(&config)?;

    let credentials = credentials_for(config.credential_by_account_id(account)?, account)?;

    info!(account, "Querying application limits");
    let limits = client
        .app_limits(&credentials.app_token)
        .await
        .with_context(|| format!("Failed to get limits for account '{}'", account))?;

    let formatter = get_formatter(format);
    print!(
        "{}",
        formatter.format_limits(&LimitsOutput::new(account, &limits))?
    );
    Ok(())
}
