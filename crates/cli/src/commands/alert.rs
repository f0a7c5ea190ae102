//! Alert command implementation.
//!
//! Splunk runs the alert script as `<script> --execute` with the alert payload
//! on stdin. Only the exit code and stderr are observed by Splunk.

use anyhow::{Result, bail};
use pushover_client::{process_event, validate_params};
use pushover_config::Config;
use tracing::info;

use crate::error::InvalidAlertParams;
use crate::host::StdinAlertHost;

pub async fn run(config: Config, execute: bool) -> Result<()> {
    if !execute {
        bail!("FATAL Unsupported execution mode (expected --execute flag)");
    }

    let client = crate::commands::build_client_from_config(&config)?;
    let host = StdinAlertHost::from_reader(std::io::stdin().lock(), config)?;

    validate_params(&host).map_err(InvalidAlertParams)?;

    let sent = process_event(&host, &client).await?;
    info!(sent, "Alert action pushover completed");
    Ok(())
}
