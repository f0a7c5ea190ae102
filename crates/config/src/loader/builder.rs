//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for hierarchical configuration merging.
//! - Support loading from environment variables, the config file, and direct builder methods.
//! - Validate and build the final `Config`.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//! - Config file parsing (delegated to file.rs).
//!
//! Invariants / Assumptions:
//! - Builder methods take precedence over environment variables, which take
//!   precedence over config file values.
//! - Accounts merge in the same order: file, then `PUSHOVER_USER`/`PUSHOVER_TOKEN`,
//!   then `with_account`.
//! - The API URL is stored without trailing slashes.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;

use super::env::apply_env;
use super::error::ConfigError;
use super::file::apply_file;
use crate::constants::{DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS, MAX_TIMEOUT_SECS};
use crate::types::{AccountConfig, Config, ConnectionConfig};

/// Configuration loader that builds config from the environment and the config file.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    api_url: Option<String>,
    timeout: Option<Duration>,
    config_path: Option<PathBuf>,
    file_accounts: BTreeMap<String, AccountConfig>,
    env_account: Option<(String, AccountConfig)>,
    accounts: BTreeMap<String, AccountConfig>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var("DOTENV_DISABLED").ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` is set to "true" or "1", the .env file is not
    /// loaded. Missing `.env` files are silently ignored.
    ///
    /// SAFETY: Error messages never include raw .env line contents to prevent secret leakage.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Override the config file path.
    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    /// Read configuration from environment variables.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    /// Read configuration from the config file (default location unless overridden).
    ///
    /// Values already set by the environment or builder methods are kept.
    pub fn from_file(mut self) -> Result<Self, ConfigError> {
        apply_file(&mut self)?;
        Ok(self)
    }

    /// Set the API base URL.
    pub fn with_api_url(mut self, url: String) -> Self {
        self.api_url = Some(url);
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Add an account that overrides any file or environment account of the same name.
    pub fn with_account(mut self, name: impl Into<String>, account: AccountConfig) -> Self {
        self.accounts.insert(name.into(), account);
        self
    }

    pub(crate) fn api_url(&self) -> Option<&String> {
        self.api_url.as_ref()
    }

    pub(crate) fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// The config file path, if one was set explicitly or via `PUSHOVER_CONFIG_PATH`.
    pub fn config_path(&self) -> Option<&PathBuf> {
        self.config_path.as_ref()
    }

    pub(crate) fn set_api_url(&mut self, url: Option<String>) {
        self.api_url = url;
    }

    pub(crate) fn set_timeout(&mut self, timeout: Option<Duration>) {
        self.timeout = timeout;
    }

    pub(crate) fn set_config_path(&mut self, path: Option<PathBuf>) {
        self.config_path = path;
    }

    pub(crate) fn set_file_accounts(&mut self, accounts: BTreeMap<String, AccountConfig>) {
        self.file_accounts = accounts;
    }

    pub(crate) fn set_env_account(&mut self, account: Option<(String, AccountConfig)>) {
        self.env_account = account;
    }

    /// Build the final configuration.
    pub fn build(self) -> Result<Config, ConfigError> {
        let api_url = validate_and_normalize_api_url(
            self.api_url.as_deref().unwrap_or(DEFAULT_API_URL),
        )?;

        let timeout = self
            .timeout
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        validate_timeout(timeout)?;

        let mut accounts = self.file_accounts;
        if let Some((name, account)) = self.env_account {
            accounts.insert(name, account);
        }
        accounts.extend(self.accounts);

        Ok(Config {
            connection: ConnectionConfig { api_url, timeout },
            accounts,
        })
    }
}

/// Validate that the URL parses with an http(s) scheme and strip trailing slashes.
fn validate_and_normalize_api_url(raw: &str) -> Result<String, ConfigError> {
    let parsed = url::Url::parse(raw).map_err(|e| ConfigError::InvalidApiUrl {
        url: raw.to_string(),
        message: e.to_string(),
    })?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidApiUrl {
            url: raw.to_string(),
            message: format!("unsupported scheme '{}'", parsed.scheme()),
        });
    }

    Ok(raw.trim_end_matches('/').to_string())
}

fn validate_timeout(timeout: Duration) -> Result<(), ConfigError> {
    let secs = timeout.as_secs();
    if secs == 0 || secs > MAX_TIMEOUT_SECS {
        return Err(ConfigError::InvalidTimeout {
            message: format!("must be between 1 and {} seconds (got {})", MAX_TIMEOUT_SECS, secs),
        });
    }
    Ok(())
}
