//! Configuration management for the Pushover add-on.
//!
//! This crate provides types and loaders for the Pushover API connection
//! settings and the named accounts (user key + application token) that alert
//! actions and search commands send with.

pub mod constants;
pub mod credentials;
mod loader;
pub mod types;

pub use credentials::{
    AccountCredentials, AccountRecord, CredentialStore, extract_account_credentials,
};
pub use loader::{ConfigError, ConfigLoader, default_config_path, env_var_or_none};
pub use types::{AccountConfig, Config, ConfigFile, ConnectionConfig, SecureValue};
