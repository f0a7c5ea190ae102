//! CLI exit codes for Splunk and scripting.
//!
//! Responsibilities:
//! - Define structured exit codes that callers can use to distinguish error types.
//! - Map ClientError categories and ConfigError to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit code 3 is reserved for invalid alert parameters, matching the
//!   modular alert convention Splunk records in `alert_actions.log`.

use pushover_client::{ClientError, ErrorCategory};
use pushover_config::ConfigError;

/// Structured exit codes for ta-pushover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// Configuration error - unknown account, missing credentials, bad settings.
    ConfigurationError = 2,

    /// Alert parameters failed validation before processing.
    InvalidAlertParams = 3,

    /// Transport error - network, timeout, or unreadable response.
    ///
    /// Callers may retry.
    TransportError = 4,

    /// Validation error - the message could not be built from the inputs.
    ValidationError = 5,

    /// The Pushover API rejected the message.
    ApiRejected = 6,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ClientError> for ExitCode {
    fn from(err: &ClientError) -> Self {
        match err.category() {
            ErrorCategory::Validation => ExitCode::ValidationError,
            ErrorCategory::Transport => ExitCode::TransportError,
            ErrorCategory::ApiRejection => ExitCode::ApiRejected,
            ErrorCategory::Configuration => ExitCode::ConfigurationError,
        }
    }
}

/// Alert parameter validation failure, raised before any event is processed.
#[derive(Debug, thiserror::Error)]
#[error("Invalid alert parameters")]
pub struct InvalidAlertParams(#[source] pub ClientError);

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if no known error is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if cause.downcast_ref::<InvalidAlertParams>().is_some() {
                return ExitCode::InvalidAlertParams;
            }
            if let Some(client_err) = cause.downcast_ref::<ClientError>() {
                return ExitCode::from(client_err);
            }
            if cause.downcast_ref::<ConfigError>().is_some() {
                return ExitCode::ConfigurationError;
            }
        }

        ExitCode::GeneralError
    }
}
