//! Error types for configuration loading and credential extraction.
//!
//! Invariants:
//! - All error variants include context for debugging (variable names, paths, etc.).
//! - Dotenv errors NEVER include raw .env line contents to prevent secret leakage.
//! - Secret values never appear in error messages.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading configuration or resolving accounts.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// An account record lacks the user key or the application token.
    #[error("Account is missing a Pushover {0}")]
    MissingCredential(&'static str),

    /// No account with this identifier is configured.
    #[error("Account '{0}' was not found")]
    AccountNotFound(String),

    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },

    #[error("Invalid API URL '{url}': {message}")]
    InvalidApiUrl { url: String, message: String },

    #[error("invalid timeout: {message}")]
    InvalidTimeout { message: String },

    #[error("Unable to determine config directory")]
    ConfigDirUnavailable,

    #[error("Failed to read config file at {path}")]
    ConfigFileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}")]
    ConfigFileParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Keyring error: {0}")]
    Keyring(#[from] keyring::Error),

    /// Failed to parse the `.env` file due to invalid syntax.
    ///
    /// SAFETY: This error only includes the byte index of the parse failure,
    /// NOT the offending line content, to prevent leaking secrets.
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { error_index: usize },

    /// Failed to read the `.env` file due to an I/O error.
    #[error("Failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    /// Unknown dotenv error (future variants from dotenvy crate).
    #[error("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown,
}
