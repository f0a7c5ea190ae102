//! Configuration loader for environment variables and files.
//!
//! Responsibilities:
//! - Load configuration from `.env` files, environment variables, and the JSON config file.
//! - Provide a builder-pattern `ConfigLoader` for hierarchical configuration merging.
//! - Enforce `DOTENV_DISABLED` gate to prevent accidental dotenv loading in tests.
//!
//! Does NOT handle:
//! - Writing configuration back to disk.
//! - Choosing between account field naming schemes (see `credentials`).
//!
//! Invariants / Assumptions:
//! - Environment variables take precedence over config file values.
//! - Builder overrides take precedence over environment variables.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.

mod builder;
mod env;
mod error;
mod file;

pub use builder::ConfigLoader;
pub use env::env_var_or_none;
pub use error::ConfigError;
pub use file::default_config_path;
