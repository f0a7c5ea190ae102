//! Pushover API client.
//!
//! This module provides [`PushoverClient`], a thin wrapper around a configured
//! `reqwest::Client` and the API base URL.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `messages`: Message delivery
//! - `limits`: Application limit lookup
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Payload validation (delegated to [`crate::payload`])
//!
//! # Invariants
//! - Every call is a single attempt: there is no retry on timeouts or rate limits
//! - The request timeout applies to each call and surfaces as a transport error

pub mod builder;

mod limits;
mod messages;

use std::time::Duration;

/// Pushover API client.
///
/// # Creating a Client
///
/// ```rust,ignore
/// use pushover_client::PushoverClient;
/// use std::time::Duration;
///
/// let client = PushoverClient::builder()
///     .timeout(Duration::from_secs(10))
///     .build()?;
/// ```
#[derive(Debug, Clone)]
pub struct PushoverClient {
    pub(crate) http: reqwest::Client,
    pub(crate) api_url: String,
    pub(crate) timeout: Duration,
}

impl PushoverClient {
    /// Create a new client builder.
    pub fn builder() -> builder::PushoverClientBuilder {
        builder::PushoverClientBuilder::new()
    }

    /// Get the API base URL.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Get the per-request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}
