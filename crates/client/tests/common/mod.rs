//! Common test utilities for integration tests.
//!
//! Shared helpers and re-exports for testing the Pushover client against a
//! wiremock server.
//!
//! # What this does NOT handle
//! - Mock server setup (use wiremock directly in tests)
//! - Test-specific assertions or test logic

use std::time::Duration;

#[allow(unused_imports)]
pub use pushover_client::{
    ClientError, ErrorCategory, EventRecord, MessageOptions, NotificationRequest, PushoverClient,
};
#[allow(unused_imports)]
pub use reqwest::Client;
#[allow(unused_imports)]
pub use secrecy::SecretString;
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// Build a client pointed at the mock server with a short timeout.
#[allow(dead_code)]
pub fn test_client(server: &MockServer) -> PushoverClient {
    PushoverClient::builder()
        .api_url(server.uri())
        .timeout(Duration::from_secs(5))
        .build()
        .expect("client should build")
}

/// Application token used throughout the tests.
#[allow(dead_code)]
pub fn test_token() -> SecretString {
    SecretString::new("azGDORePK8gMaC0QOYAMyEEuzJnyUi".to_string().into())
}

/// Event record from string pairs.
#[allow(dead_code)]
pub fn event(pairs: &[(&str, &str)]) -> EventRecord {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Body of a successful `messages.json` response.
#[allow(dead_code)]
pub fn success_body(request_id: &str) -> serde_json::Value {
    serde_json::json!({ "status": 1, "request": request_id })
}
