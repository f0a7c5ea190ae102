//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse `PUSHOVER_*` environment variables.
//! - Apply environment variable values to a ConfigLoader instance.
//! - Provide helper functions for reading env vars with empty/whitespace filtering.
//!
//! Does NOT handle:
//! - Loading the config file (see file.rs).
//! - Building the final Config (see builder.rs).
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Invalid numeric values return ConfigError::InvalidValue.

use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::constants::DEFAULT_ACCOUNT_NAME;
use crate::types::{AccountConfig, SecureValue};

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Apply environment variable configuration to the loader.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(url) = env_var_or_none("PUSHOVER_API_URL") {
        loader.set_api_url(Some(url));
    }
    if let Some(timeout) = env_var_or_none("PUSHOVER_TIMEOUT") {
        let secs: u64 = timeout.parse().map_err(|_| ConfigError::InvalidValue {
            var: "PUSHOVER_TIMEOUT".to_string(),
            message: "must be a number of seconds".to_string(),
        })?;
        loader.set_timeout(Some(Duration::from_secs(secs)));
    }

    let user = env_var_or_none("PUSHOVER_USER");
    let token = env_var_or_none("PUSHOVER_TOKEN");
    if user.is_some() || token.is_some() {
        let name =
            env_var_or_none("PUSHOVER_ACCOUNT").unwrap_or_else(|| DEFAULT_ACCOUNT_NAME.to_string());
        let account = AccountConfig {
            user,
            app_token: token.map(SecureValue::plain),
            ..AccountConfig::default()
        };
        loader.set_env_account(Some((name, account)));
    }

    if loader.config_path().is_none()
        && let Some(config_path) = env_var_or_none("PUSHOVER_CONFIG_PATH")
    {
        loader.set_config_path(Some(std::path::PathBuf::from(config_path)));
    }

    Ok(())
}
