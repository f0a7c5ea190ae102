//! Config file loading.
//!
//! Responsibilities:
//! - Locate the default config file (`<config dir>/ta-pushover.json`).
//! - Read and parse the JSON config file into a `ConfigFile`.
//! - Apply file values to a ConfigLoader without overriding values already set.
//!
//! Does NOT handle:
//! - Environment variables (see env.rs).
//! - Keyring resolution (deferred until an account is looked up).
//!
//! Invariants:
//! - A missing config file is not an error; a malformed one is.

use std::path::{Path, PathBuf};
use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::constants::CONFIG_FILE_NAME;
use crate::types::ConfigFile;

/// Returns the default path to the configuration file.
///
/// - Linux: `~/.config/ta-pushover.json`
/// - macOS: `~/Library/Application Support/ta-pushover.json`
/// - Windows: `%AppData%\ta-pushover.json`
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let base_dirs = directories::BaseDirs::new().ok_or(ConfigError::ConfigDirUnavailable)?;
    Ok(base_dirs.config_dir().join(CONFIG_FILE_NAME))
}

/// Read a config file, returning `None` when it does not exist.
pub(crate) fn read_config_file(path: &Path) -> Result<Option<ConfigFile>, ConfigError> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "Config file not found, skipping");
            return Ok(None);
        }
        Err(source) => {
            return Err(ConfigError::ConfigFileRead {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let file = serde_json::from_str(&contents).map_err(|source| ConfigError::ConfigFileParse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(file))
}

/// Apply config file values to the loader.
pub fn apply_file(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    let path = match loader.config_path() {
        Some(path) => path.clone(),
        None => default_config_path()?,
    };

    let Some(file) = read_config_file(&path)? else {
        return Ok(());
    };

    tracing::debug!(
        path = %path.display(),
        accounts = file.accounts.len(),
        "Loaded config file"
    );

    if loader.api_url().is_none() {
        loader.set_api_url(file.api_url);
    }
    if loader.timeout().is_none() {
        loader.set_timeout(file.timeout_secs.map(Duration::from_secs));
    }
    loader.set_file_accounts(file.accounts);
    Ok(())
}
