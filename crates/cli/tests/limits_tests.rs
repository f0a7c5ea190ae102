//! Integration tests for `ta-pushover limits`.

mod common;

use common::{pushover_cmd_with, write_test_config};
use predicates::prelude::*;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_limits(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/apps/limits.json"))
        .and(query_param("token", "aToken"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "limit": 10000,
            "remaining": 7496,
            "reset": 1393653600,
            "status": 1,
            "request": "000000000000000000000000000000000"
        })))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_limits_table() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let config = write_test_config(&dir);
    mount_limits(&server).await;

    pushover_cmd_with(&server.uri(), &config)
        .args(["limits", "--account", "prod"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Limit:      10000"))
        .stdout(predicate::str::contains("Remaining:  7496"))
        .stdout(predicate::str::contains("2014-03-01T06:00:00+00:00"));
}

#[tokio::test]
async fn test_limits_json() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let config = write_test_config(&dir);
    mount_limits(&server).await;

    let output = pushover_cmd_with(&server.uri(), &config)
        .args(["--output", "json", "limits", "--account", "prod"])
        .assert()
        .code(0)
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["account"], "prod");
    assert_eq!(value["remaining"], 7496);
    assert_eq!(value["reset"], 1393653600);
}

#[tokio::test]
async fn test_limits_invalid_token_is_rejection() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let config = write_test_config(&dir);

    Mock::given(method("GET"))
        .and(path("/apps/limits.json"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "token": "invalid",
            "errors": ["application token is invalid"],
            "status": 0
        })))
        .mount(&server)
        .await;

    pushover_cmd_with(&server.uri(), &config)
        .args(["limits", "--account", "prod"])
        .assert()
        .code(6)
        .stderr(predicate::str::contains("Failed to get limits for account 'prod'"))
        .stderr(predicate::str::contains("application token is invalid"));
}
