//! Integration tests for structured exit codes.
//!
//! These tests verify that ta-pushover returns the correct exit codes
//! for different error scenarios, enabling reliable alert diagnostics.

mod common;

use common::{pushover_cmd, pushover_cmd_with, write_test_config};
use predicates::prelude::*;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Test that an unknown account returns exit code 2.
#[test]
fn test_unknown_account_returns_exit_code_2() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_test_config(&dir);

    pushover_cmd_with("http://127.0.0.1:1", &config)
        .args(["send", "--account", "staging", "--message", "hi"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Account 'staging' was not found"));
}

/// Test that a malformed config file returns exit code 2.
#[test]
fn test_malformed_config_returns_exit_code_2() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("ta-pushover.json");
    std::fs::write(&config, "{ not json").unwrap();

    pushover_cmd_with("http://127.0.0.1:1", &config)
        .args(["send", "--account", "prod", "--message", "hi"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to load configuration file"));
}

/// Test that an invalid API URL returns exit code 2.
#[test]
fn test_invalid_api_url_returns_exit_code_2() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_test_config(&dir);

    pushover_cmd_with("ftp://example.com", &config)
        .args(["send", "--account", "prod", "--message", "hi"])
        .assert()
        .code(2);
}

/// Test that connection refused returns exit code 4.
#[test]
fn test_connection_refused_returns_exit_code_4() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_test_config(&dir);

    pushover_cmd_with("http://127.0.0.1:1", &config)
        .args(["--timeout", "2", "send", "--account", "prod", "--message", "hi"])
        .assert()
        .code(4);
}

/// Test that a non-JSON response returns exit code 4.
#[tokio::test]
async fn test_non_json_response_returns_exit_code_4() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let config = write_test_config(&dir);

    Mock::given(method("POST"))
        .and(path("/messages.json"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    pushover_cmd_with(&server.uri(), &config)
        .args(["send", "--account", "prod", "--message", "hi"])
        .assert()
        .code(4);
}

/// Test that validation failures return exit code 5 without a request.
#[tokio::test]
async fn test_priority_out_of_range_returns_exit_code_5() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let config = write_test_config(&dir);

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    pushover_cmd_with(&server.uri(), &config)
        .args(["send", "--account", "prod", "--message", "hi", "--priority", "3"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("Priority needs to be between -2 and 2"));
}

/// Test that an over-long title returns exit code 5.
#[test]
fn test_title_too_long_returns_exit_code_5() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_test_config(&dir);
    let title = "t".repeat(251);

    pushover_cmd_with("http://127.0.0.1:1", &config)
        .args(["send", "--account", "prod", "--message", "hi", "--title", &title])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("Length of title is too long 251 > 250"));
}

/// Test that an API rejection returns exit code 6.
#[tokio::test]
async fn test_api_rejection_returns_exit_code_6() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let config = write_test_config(&dir);

    Mock::given(method("POST"))
        .and(path("/messages.json"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(json!({ "status": 0, "errors": ["user identifier is invalid"] })),
        )
        .mount(&server)
        .await;

    pushover_cmd_with(&server.uri(), &config)
        .args(["send", "--account", "prod", "--message", "hi"])
        .assert()
        .code(6);
}

/// Test that an invalid output format is a general error.
#[test]
fn test_invalid_output_format_returns_exit_code_1() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_test_config(&dir);

    pushover_cmd_with("http://127.0.0.1:1", &config)
        .args(["--output", "xml", "limits", "--account", "prod"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid output format"));
}

/// Test that clap usage errors keep clap's own exit code.
#[test]
fn test_usage_error_returns_exit_code_2() {
    pushover_cmd().args(["send"]).assert().code(2);
}
