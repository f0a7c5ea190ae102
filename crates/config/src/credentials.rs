//! Account credential records and extraction.
//!
//! Responsibilities:
//! - Define the opaque account record shape returned by credential stores.
//! - Extract a Pushover user key and application token from a record.
//! - Define the [`CredentialStore`] seam used by alert hosts.
//!
//! Does NOT handle:
//! - Loading accounts from disk or the environment (see `loader`).
//! - Keyring lookups (resolved before a record is produced, see `types`).
//!
//! Invariants:
//! - The preferred field names (`user`, `app_token`) are checked before the
//!   legacy ones (`username`, `password`).
//! - Empty values count as absent.
//! - Application tokens only leave this module wrapped in `SecretString`.

use std::collections::BTreeMap;

use secrecy::SecretString;

use crate::loader::ConfigError;

/// A stored account as a flat field-name to value mapping.
pub type AccountRecord = BTreeMap<String, String>;

/// User key and application token resolved from an [`AccountRecord`].
#[derive(Debug, Clone)]
pub struct AccountCredentials {
    /// Pushover user (or group) key the message is delivered to.
    pub user_key: String,
    /// Pushover application token the message is sent with.
    pub app_token: SecretString,
}

/// Lookup of account records by account identifier.
pub trait CredentialStore {
    /// Return the record stored for `account_id`, or `None` if it is unknown.
    fn credential_by_account_id(
        &self,
        account_id: &str,
    ) -> Result<Option<AccountRecord>, ConfigError>;
}

fn non_empty<'a>(record: &'a AccountRecord, key: &str) -> Option<&'a str> {
    record
        .get(key)
        .map(String::as_str)
        .filter(|value| !value.is_empty())
}

/// Extract the user key and application token from an account record.
///
/// Both the current (`user`/`app_token`) and legacy (`username`/`password`)
/// naming schemes are accepted.
///
/// # Errors
///
/// Returns [`ConfigError::MissingCredential`] naming the user key or the
/// application token when neither scheme provides a non-empty value.
pub fn extract_account_credentials(
    record: &AccountRecord,
) -> Result<AccountCredentials, ConfigError> {
    let user_key = non_empty(record, "user")
        .or_else(|| non_empty(record, "username"))
        .ok_or(ConfigError::MissingCredential("user key"))?;
    let app_token = non_empty(record, "app_token")
        .or_else(|| non_empty(record, "password"))
        .ok_or(ConfigError::MissingCredential("application token"))?;

    Ok(AccountCredentials {
        user_key: user_key.to_string(),
        app_token: SecretString::new(app_token.into()),
    })
}
