//! Integration tests for `ta-pushover send`.

mod common;

use common::{pushover_cmd, pushover_cmd_with, write_test_config};
use predicates::prelude::*;
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[test]
fn test_send_help() {
    pushover_cmd()
        .args(["send", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Send a single notification"));
}

#[tokio::test]
async fn test_send_success_json_record() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let config = write_test_config(&dir);

    Mock::given(method("POST"))
        .and(path("/messages.json"))
        .and(body_partial_json(json!({
            "token": "aToken",
            "user": "uKey",
            "message": "Disk full",
            "title": "web01",
            "priority": "1"
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "status": 1, "request": "abc123" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let output = pushover_cmd_with(&server.uri(), &config)
        .args([
            "--output", "json", "send", "--account", "prod", "--message", "Disk full",
            "--title", "web01", "--priority", "1",
        ])
        .assert()
        .code(0)
        .get_output()
        .stdout
        .clone();

    let record: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(
        record,
        json!({
            "status": "success",
            "account": "prod",
            "request_id": "abc123",
            "api_status": "1"
        })
    );
}

#[tokio::test]
async fn test_send_rejection_prints_error_record() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let config = write_test_config(&dir);

    Mock::given(method("POST"))
        .and(path("/messages.json"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(json!({ "status": 0, "errors": ["bad request"] })),
        )
        .mount(&server)
        .await;

    pushover_cmd_with(&server.uri(), &config)
        .args(["send", "--account", "prod", "--message", "hi"])
        .assert()
        .code(6)
        .stdout(predicate::str::contains("Status:     error"))
        .stdout(predicate::str::contains("bad request"));
}

#[tokio::test]
async fn test_send_csv_output() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let config = write_test_config(&dir);

    Mock::given(method("POST"))
        .and(path("/messages.json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "status": 1, "request": "r-9" })),
        )
        .mount(&server)
        .await;

    pushover_cmd_with(&server.uri(), &config)
        .args(["--output", "csv", "send", "--account", "prod", "--message", "hi"])
        .assert()
        .code(0)
        .stdout(predicate::eq(
            "status,account,request_id,api_status,error\nsuccess,prod,r-9,1,N/A\n",
        ));
}

#[tokio::test]
async fn test_send_with_env_account() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();

    Mock::given(method("POST"))
        .and(path("/messages.json"))
        .and(body_partial_json(json!({ "user": "envUser", "token": "envToken" })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "status": 1, "request": "r" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    pushover_cmd_with(&server.uri(), &dir.path().join("absent.json"))
        .env("PUSHOVER_USER", "envUser")
        .env("PUSHOVER_TOKEN", "envToken")
        .args(["send", "--account", "default", "--message", "hi"])
        .assert()
        .code(0);
}
