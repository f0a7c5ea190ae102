//! Client builder for constructing [`PushoverClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Normalizing the API base URL (removing trailing slashes)
//! - Configuring the underlying HTTP client (timeout, redirects, user agent)
//!
//! # Invariants
//! - The API URL is always normalized to have no trailing slashes

use std::time::Duration;

use pushover_config::{
    Config,
    constants::{DEFAULT_API_URL, DEFAULT_MAX_REDIRECTS, DEFAULT_TIMEOUT_SECS},
};

use crate::client::PushoverClient;
use crate::error::{ClientError, Result};

/// Builder for creating a new [`PushoverClient`].
pub struct PushoverClientBuilder {
    api_url: String,
    timeout: Duration,
    user_agent: String,
}

impl Default for PushoverClientBuilder {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: format!("ta-pushover/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl PushoverClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API base URL, e.g. `https://api.pushover.net/1`.
    pub fn api_url(mut self, url: String) -> Self {
        self.api_url = url;
        self
    }

    /// Set the request timeout.
    ///
    /// Default is 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Create a client builder from configuration.
    pub fn from_config(mut self, config: &Config) -> Self {
        self.api_url = config.connection.api_url.clone();
        self.timeout = config.connection.timeout;
        self
    }

    fn normalize_api_url(url: &str) -> String {
        url.trim().trim_end_matches('/').to_string()
    }

    /// Build the [`PushoverClient`].
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if the API URL is blank.
    /// Returns `ClientError::HttpError` if the HTTP client fails to build.
    pub fn build(self) -> Result<PushoverClient> {
        let api_url = Self::normalize_api_url(&self.api_url);
        if api_url.is_empty() {
            return Err(ClientError::InvalidUrl("api_url is required".to_string()));
        }

        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS))
            .user_agent(self.user_agent)
            .build()?;

        Ok(PushoverClient {
            http,
            api_url,
            timeout: self.timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pushover_config::ConfigLoader;

    #[test]
    fn test_from_config_preserves_settings() {
        let config = ConfigLoader::new()
            .with_api_url("https://pushover.example.com/1".to_string())
            .with_timeout(Duration::from_secs(5))
            .build()
            .unwrap();

        let client = PushoverClient::builder().from_config(&config).build().unwrap();
        assert_eq!(client.api_url(), "https://pushover.example.com/1");
        assert_eq!(client.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_normalize_api_url() {
        assert_eq!(
            PushoverClientBuilder::normalize_api_url("https://api.pushover.net/1//"),
            "https://api.pushover.net/1"
        );
        assert_eq!(
            PushoverClientBuilder::normalize_api_url("https://api.pushover.net/1"),
            "https://api.pushover.net/1"
        );
    }
}
