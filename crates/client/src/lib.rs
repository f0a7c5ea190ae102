//! Pushover API client for Splunk alert actions.
//!
//! This crate validates notification payloads against the Pushover message
//! constraints, resolves alert configuration against event data, sends
//! messages, and interprets the API's answers.

pub mod alert;
pub mod client;
pub mod command;
pub mod endpoints;
pub mod error;
pub mod models;
pub mod payload;
pub mod resolve;

pub use alert::{AlertHost, process_event, validate_params};
pub use client::PushoverClient;
pub use client::builder::PushoverClientBuilder;
pub use command::{CommandRecord, SendCommand};
pub use error::{ClientError, ErrorCategory, Result};
pub use models::{AppLimits, EventRecord, SendReceipt};
pub use payload::{MessageFormat, MessageOptions, NotificationRequest, Priority};
pub use resolve::{ValueResolver, parse_bool, parse_int, parse_priority, resolve_value};
