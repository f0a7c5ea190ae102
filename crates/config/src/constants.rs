//! Centralized constants for the Pushover add-on workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication.

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Base URL of the Pushover API (version 1).
pub const DEFAULT_API_URL: &str = "https://api.pushover.net/1";

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

// =============================================================================
// Config File & Accounts
// =============================================================================

/// File name of the JSON config file inside the config directory.
pub const CONFIG_FILE_NAME: &str = "ta-pushover.json";

/// Account name used when credentials come from `PUSHOVER_USER`/`PUSHOVER_TOKEN`
/// and `PUSHOVER_ACCOUNT` is unset.
pub const DEFAULT_ACCOUNT_NAME: &str = "default";

/// Service name used for keyring storage.
pub const KEYRING_SERVICE: &str = "ta-pushover";
