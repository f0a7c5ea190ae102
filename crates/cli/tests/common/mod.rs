//! Shared test utilities for ta-pushover integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Write throwaway config files with test accounts.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper will be hermetic by default.
//! - The user's own config file is never read.

use assert_cmd::Command;
use std::path::Path;
use tempfile::TempDir;

/// Returns a hermetic `ta-pushover` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - `PUSHOVER_*` env vars from the host are cleared.
/// - The config path points at a file that does not exist.
pub fn pushover_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("ta-pushover");

    cmd.env("DOTENV_DISABLED", "1");

    cmd.env_remove("PUSHOVER_API_URL")
        .env_remove("PUSHOVER_TIMEOUT")
        .env_remove("PUSHOVER_USER")
        .env_remove("PUSHOVER_TOKEN")
        .env_remove("PUSHOVER_ACCOUNT")
        .env_remove("RUST_LOG");

    cmd.env(
        "PUSHOVER_CONFIG_PATH",
        std::env::temp_dir().join("ta-pushover-tests-absent/ta-pushover.json"),
    );

    cmd
}

/// Write a config file with a `prod` account and a token-less `broken` account.
#[allow(dead_code)]
pub fn write_test_config(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("ta-pushover.json");
    std::fs::write(
        &path,
        r#"{
            "accounts": {
                "prod": { "user": "uKey", "app_token": "aToken" },
                "broken": { "user": "uKey" }
            }
        }"#,
    )
    .expect("config should be writable");
    path
}

/// Returns a hermetic command wired to a mock API and a test config file.
#[allow(dead_code)]
pub fn pushover_cmd_with(api_url: &str, config_path: &Path) -> Command {
    let mut cmd = pushover_cmd();
    cmd.env("PUSHOVER_API_URL", api_url);
    cmd.env("PUSHOVER_CONFIG_PATH", config_path);
    cmd
}
