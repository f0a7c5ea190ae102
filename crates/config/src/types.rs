//! Configuration types for the Pushover add-on.
//!
//! Responsibilities:
//! - Define the resolved [`Config`] handed to the client and CLI.
//! - Define the on-disk [`ConfigFile`] shape and per-account settings.
//! - Provide secure value storage (plain text or keyring) for tokens.
//!
//! Does NOT handle:
//! - Reading files or environment variables (see `loader`).
//! - Deciding which account field wins (see `credentials`).
//!
//! Invariants:
//! - All secret values use `secrecy::SecretString` to prevent accidental logging.
//! - Account records keep both naming schemes side by side; precedence is
//!   applied only by `extract_account_credentials`.

use std::collections::BTreeMap;
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS, KEYRING_SERVICE};
use crate::credentials::{AccountRecord, CredentialStore};
use crate::loader::ConfigError;

/// Module for serializing SecretString as strings.
mod secret_string {
    use secrecy::{ExposeSecret, SecretString};
    use serde::{Deserialize as DeserializeTrait, Serialize as SerializeTrait};
    use serde::{Deserializer, Serializer};

    pub fn serialize<S>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        secret.expose_secret().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(SecretString::new(s.into()))
    }
}

/// A value that can be stored either in plain text or in the system keyring.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SecureValue {
    /// Value stored in the system keyring.
    Keyring {
        /// The account name in the keyring.
        keyring_account: String,
    },
    /// Value stored in plain text (as a SecretString).
    #[serde(with = "secret_string")]
    Plain(SecretString),
}

impl SecureValue {
    /// Wrap a plain-text secret.
    pub fn plain(value: impl Into<String>) -> Self {
        Self::Plain(SecretString::new(value.into().into()))
    }

    /// Resolve the secure value to a SecretString.
    ///
    /// If the value is stored in the keyring, it will be fetched.
    pub fn resolve(&self) -> Result<SecretString, keyring::Error> {
        match self {
            Self::Plain(secret) => Ok(secret.clone()),
            Self::Keyring { keyring_account } => {
                let entry = keyring::Entry::new(KEYRING_SERVICE, keyring_account)?;
                let password = entry.get_password()?;
                Ok(SecretString::new(password.into()))
            }
        }
    }
}

/// One named Pushover account as written in the config file.
///
/// `user`/`app_token` is the current naming; `username`/`password` is the
/// legacy one and is still accepted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccountConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_token: Option<SecureValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<SecureValue>,
}

impl AccountConfig {
    /// Create an account using the current field names.
    pub fn new(user: impl Into<String>, app_token: impl Into<String>) -> Self {
        Self {
            user: Some(user.into()),
            app_token: Some(SecureValue::plain(app_token)),
            ..Self::default()
        }
    }

    /// Flatten into an [`AccountRecord`], resolving keyring-backed secrets.
    pub fn to_record(&self) -> Result<AccountRecord, ConfigError> {
        let mut record = AccountRecord::new();
        if let Some(user) = &self.user {
            record.insert("user".to_string(), user.clone());
        }
        if let Some(username) = &self.username {
            record.insert("username".to_string(), username.clone());
        }
        if let Some(token) = &self.app_token {
            record.insert(
                "app_token".to_string(),
                token.resolve()?.expose_secret().to_string(),
            );
        }
        if let Some(password) = &self.password {
            record.insert(
                "password".to_string(),
                password.resolve()?.expose_secret().to_string(),
            );
        }
        Ok(record)
    }
}

/// Shape of the JSON config file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
    #[serde(default)]
    pub accounts: BTreeMap<String, AccountConfig>,
}

/// Connection settings for the Pushover API.
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    /// API base URL without trailing slash, e.g. `https://api.pushover.net/1`.
    pub api_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Fully resolved configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub connection: ConnectionConfig,
    pub accounts: BTreeMap<String, AccountConfig>,
}

impl Config {
    /// Add (or replace) a named account.
    pub fn with_account(mut self, name: impl Into<String>, account: AccountConfig) -> Self {
        self.accounts.insert(name.into(), account);
        self
    }

    /// Names of all configured accounts, sorted.
    pub fn account_names(&self) -> Vec<&str> {
        self.accounts.keys().map(String::as_str).collect()
    }
}

impl CredentialStore for Config {
    fn credential_by_account_id(
        &self,
        account_id: &str,
    ) -> Result<Option<AccountRecord>, ConfigError> {
        self.accounts
            .get(account_id)
            .map(AccountConfig::to_record)
            .transpose()
    }
}
