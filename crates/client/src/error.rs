//! Error types for the Pushover client.

use std::time::Duration;

use pushover_config::ConfigError;
use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Broad classification of a [`ClientError`].
///
/// Callers use this to decide how to report a failure: validation and
/// configuration errors happen before anything is sent, transport errors
/// during or after the HTTP call, and API rejections after Pushover answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Transport,
    ApiRejection,
    Configuration,
}

/// Errors that can occur while building, sending, or interpreting a notification.
#[derive(Error, Debug)]
pub enum ClientError {
    /// A bounded string field exceeds its maximum length.
    #[error("Length of {field} is too long {length} > {max}")]
    FieldTooLong {
        field: &'static str,
        length: usize,
        max: usize,
    },

    /// Priority outside of -2..=2.
    #[error("Priority needs to be between -2 and 2 (got {0})")]
    PriorityOutOfRange(i64),

    /// Both html and monospace were requested.
    #[error("html and monospace are mutually exclusive: set either monospace or html, not both")]
    ConflictingFormat,

    /// The message is empty after resolution.
    #[error("Message resolved to an empty value")]
    EmptyMessage,

    /// A required alert or command parameter is missing.
    #[error("'{0}' is required")]
    MissingParameter(String),

    /// A value that must be an integer could not be parsed.
    #[error("Invalid integer for {field}: '{value}'")]
    InvalidInteger { field: String, value: String },

    /// The response carried no `status` field.
    #[error("status not returned in response: {0}")]
    MissingStatus(String),

    /// HTTP request error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Request timed out.
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// Connection refused.
    #[error("Connection refused to {0}")]
    ConnectionRefused(String),

    /// The response body was not JSON.
    #[error("Pushover response was not valid JSON: {0}")]
    InvalidResponse(String),

    /// Pushover answered with a failure status and an `errors` list.
    #[error("Pushover rejected message: {}", .0.join("; "))]
    Rejected(Vec<String>),

    /// Pushover answered with a failure status and no `errors`.
    #[error("Status code returned from API was: '{0}'")]
    UnexpectedStatus(String),

    /// Invalid API URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Account or credential configuration problem.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ClientError {
    /// Classify this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FieldTooLong { .. }
            | Self::PriorityOutOfRange(_)
            | Self::ConflictingFormat
            | Self::EmptyMessage
            | Self::InvalidInteger { .. }
            | Self::MissingStatus(_) => ErrorCategory::Validation,
            Self::HttpError(_)
            | Self::Timeout(_)
            | Self::ConnectionRefused(_)
            | Self::InvalidResponse(_) => ErrorCategory::Transport,
            Self::Rejected(_) | Self::UnexpectedStatus(_) => ErrorCategory::ApiRejection,
            Self::MissingParameter(_) | Self::InvalidUrl(_) | Self::Config(_) => {
                ErrorCategory::Configuration
            }
        }
    }

    /// True when the error was raised before any network call was attempted.
    pub fn is_pre_transmission(&self) -> bool {
        matches!(
            self.category(),
            ErrorCategory::Validation | ErrorCategory::Configuration
        ) && !matches!(self, Self::MissingStatus(_))
    }

    /// Map a reqwest send error to the most specific variant.
    pub(crate) fn from_send_error(err: reqwest::Error, url: &str, timeout: Duration) -> Self {
        if err.is_timeout() {
            Self::Timeout(timeout)
        } else if err.is_connect() {
            Self::ConnectionRefused(url.to_string())
        } else {
            Self::HttpError(err)
        }
    }
}
