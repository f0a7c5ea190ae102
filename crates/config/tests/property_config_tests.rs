//! Property-based tests for configuration loading.
//!
//! Test coverage:
//! - env_var_or_none: blank values are unset, present values are trimmed
//! - ConfigLoader::build: timeouts accepted exactly within 1..=MAX_TIMEOUT_SECS
//! - ConfigLoader::build: trailing slashes are stripped from the API URL

use proptest::prelude::*;
use pushover_config::constants::MAX_TIMEOUT_SECS;
use pushover_config::{ConfigError, ConfigLoader, env_var_or_none};
use serial_test::serial;
use std::time::Duration;

/// Variable used only by these tests.
const TRIM_VAR: &str = "PUSHOVER_PROPERTY_TEST_VALUE";

/// Strategy for generating valid API base URLs without a trailing slash.
fn api_url_strategy() -> impl Strategy<Value = String> {
    let scheme = prop_oneof![Just("http"), Just("https")];
    let host = prop_oneof![
        Just("api.pushover.net"),
        Just("localhost"),
        Just("pushover.internal.local"),
        Just("127.0.0.1"),
    ];
    let port = prop::option::of(1024u16..=65535u16);
    let path = prop_oneof![Just(""), Just("/1"), Just("/proxy/1")];

    (scheme, host, port, path).prop_map(|(scheme, host, port, path)| match port {
        Some(port) => format!("{}://{}:{}{}", scheme, host, port, path),
        None => format!("{}://{}{}", scheme, host, path),
    })
}

/// Strategy for whitespace padding around a value.
fn padding_strategy() -> impl Strategy<Value = String> {
    "[ \t]{0,4}".prop_map(String::from)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    #[serial]
    fn env_values_are_trimmed(
        value in "[a-zA-Z0-9_./:-]{1,32}",
        left in padding_strategy(),
        right in padding_strategy(),
    ) {
        let raw = format!("{}{}{}", left, value, right);
        let read = temp_env::with_var(TRIM_VAR, Some(raw.as_str()), || env_var_or_none(TRIM_VAR));
        prop_assert_eq!(read, Some(value));
    }

    #[test]
    #[serial]
    fn blank_env_values_are_unset(blank in "[ \t]{0,8}") {
        let read = temp_env::with_var(TRIM_VAR, Some(blank.as_str()), || env_var_or_none(TRIM_VAR));
        prop_assert_eq!(read, None);
    }

    #[test]
    fn timeout_accepted_only_within_range(secs in 0u64..(MAX_TIMEOUT_SECS * 2)) {
        let result = ConfigLoader::new()
            .with_timeout(Duration::from_secs(secs))
            .build();

        if (1..=MAX_TIMEOUT_SECS).contains(&secs) {
            let config = result.unwrap();
            prop_assert_eq!(config.connection.timeout, Duration::from_secs(secs));
        } else {
            let is_invalid_timeout = matches!(result, Err(ConfigError::InvalidTimeout { .. }));
            prop_assert!(is_invalid_timeout);
        }
    }

    #[test]
    fn trailing_slashes_stripped_from_api_url(base in api_url_strategy(), slashes in 0usize..4) {
        let raw = format!("{}{}", base, "/".repeat(slashes));
        let config = ConfigLoader::new().with_api_url(raw).build().unwrap();

        prop_assert_eq!(config.connection.api_url, base);
    }
}
