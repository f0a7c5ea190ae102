//! CLI command implementations.

pub mod alert;
pub mod limits;
pub mod send;

use anyhow::{Context, Result};
use pushover_client::PushoverClient;
use pushover_config::Config;

/// Build a Pushover client from the resolved configuration.
pub fn build_client_from_config(config: &Config) -> Result<PushoverClient> {
    PushoverClient::builder()
        .from_config(config)
        .build()
        .context("Failed to build Pushover client")
}
