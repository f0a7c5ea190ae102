//! Notification payload construction and validation.
//!
//! This module is responsible for:
//! - Assembling a [`NotificationRequest`] from a message and [`MessageOptions`]
//! - Enforcing the Pushover field constraints before anything is sent
//! - Rendering the request as the flat string-valued JSON object the API expects
//!
//! # What this module does NOT handle:
//! - Resolving option values from alert configuration (see [`crate::resolve`])
//! - Sending the request (see [`crate::client`])
//!
//! # Invariants
//! - At most one of html/monospace is set on a built request
//! - Every bounded field respects its maximum length, counted in characters
//! - `url_title` is only present when `url` is present
//! - Priority is always within -2..=2 and always sent

use std::fmt;

use secrecy::{ExposeSecret, SecretString};
use serde_json::{Map, Value};

use crate::error::{ClientError, Result};

/// Maximum length of `title`.
pub const MAX_TITLE_LEN: usize = 250;
/// Maximum length of `message`.
pub const MAX_MESSAGE_LEN: usize = 1024;
/// Maximum length of `url`.
pub const MAX_URL_LEN: usize = 512;
/// Maximum length of `url_title`.
pub const MAX_URL_TITLE_LEN: usize = 100;

/// Sound value meaning "do not send a sound, use the recipient's default".
pub const SOUND_OMIT_MARKER: &str = "_";

/// Message priority, -2 (lowest) to 2 (emergency).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct Priority(i8);

impl Priority {
    pub const MIN: i64 = -2;
    pub const MAX: i64 = 2;

    /// Validate a priority value.
    pub fn new(value: i64) -> Result<Self> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ClientError::PriorityOutOfRange(value));
        }
        Ok(Self(value as i8))
    }

    pub fn value(self) -> i8 {
        self.0
    }
}

impl TryFrom<i64> for Priority {
    type Error = ClientError;

    fn try_from(value: i64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Priority> for i64 {
    fn from(priority: Priority) -> Self {
        i64::from(priority.0)
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Text rendering of the message body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MessageFormat {
    #[default]
    Plain,
    Html,
    Monospace,
}

impl MessageFormat {
    /// Combine the two request flags, rejecting the case where both are set.
    pub fn from_flags(html: bool, monospace: bool) -> Result<Self> {
        match (html, monospace) {
            (true, true) => Err(ClientError::ConflictingFormat),
            (true, false) => Ok(Self::Html),
            (false, true) => Ok(Self::Monospace),
            (false, false) => Ok(Self::Plain),
        }
    }
}

/// Optional message fields, as supplied by the caller before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageOptions {
    pub title: Option<String>,
    pub url: Option<String>,
    pub url_title: Option<String>,
    pub priority: Option<i64>,
    pub sound: Option<String>,
    pub device: Option<String>,
    pub timestamp: Option<i64>,
    pub html: bool,
    pub monospace: bool,
}

/// A validated notification, ready for transmission.
///
/// Built fresh for every send with [`NotificationRequest::build`]; there is
/// no way to mutate it afterwards.
#[derive(Debug, Clone)]
pub struct NotificationRequest {
    token: SecretString,
    user: String,
    message: String,
    title: Option<String>,
    url: Option<String>,
    url_title: Option<String>,
    priority: Priority,
    sound: Option<String>,
    device: Option<String>,
    timestamp: Option<i64>,
    format: MessageFormat,
}

fn check_length(field: &'static str, value: Option<&str>, max: usize) -> Result<()> {
    if let Some(value) = value {
        let length = value.chars().count();
        if length > max {
            return Err(ClientError::FieldTooLong { field, length, max });
        }
    }
    Ok(())
}

impl NotificationRequest {
    /// Validate and assemble a request.
    ///
    /// # Errors
    ///
    /// - [`ClientError::EmptyMessage`] if `message` is empty
    /// - [`ClientError::PriorityOutOfRange`] if the priority is outside -2..=2
    /// - [`ClientError::ConflictingFormat`] if both html and monospace are set
    /// - [`ClientError::FieldTooLong`] for the first of title, message, url,
    ///   url_title that exceeds its limit
    pub fn build(
        token: SecretString,
        user: impl Into<String>,
        message: impl Into<String>,
        options: &MessageOptions,
    ) -> Result<Self> {
        let message = message.into();
        if message.is_empty() {
            return Err(ClientError::EmptyMessage);
        }

        let sound = options
            .sound
            .as_deref()
            .filter(|sound| !sound.is_empty() && *sound != SOUND_OMIT_MARKER)
            .map(str::to_string);

        // url_title without url is dropped, not rejected.
        let url = options.url.clone();
        let url_title = url.as_ref().and(options.url_title.clone());

        let priority = match options.priority {
            Some(value) => Priority::new(value)?,
            None => Priority::default(),
        };
        let format = MessageFormat::from_flags(options.html, options.monospace)?;

        let request = Self {
            token,
            user: user.into(),
            message,
            title: options.title.clone(),
            url,
            url_title,
            priority,
            sound,
            device: options.device.clone(),
            timestamp: options.timestamp,
            format,
        };
        request.check_lengths()?;
        Ok(request)
    }

    fn check_lengths(&self) -> Result<()> {
        check_length("title", self.title.as_deref(), MAX_TITLE_LEN)?;
        check_length("message", Some(&self.message), MAX_MESSAGE_LEN)?;
        check_length("url", self.url.as_deref(), MAX_URL_LEN)?;
        check_length("url_title", self.url_title.as_deref(), MAX_URL_TITLE_LEN)?;
        Ok(())
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn url_title(&self) -> Option<&str> {
        self.url_title.as_deref()
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn sound(&self) -> Option<&str> {
        self.sound.as_deref()
    }

    pub fn device(&self) -> Option<&str> {
        self.device.as_deref()
    }

    pub fn timestamp(&self) -> Option<i64> {
        self.timestamp
    }

    pub fn format(&self) -> MessageFormat {
        self.format
    }

    /// Render the wire payload: a JSON object whose values are all strings.
    pub fn to_payload(&self) -> Map<String, Value> {
        self.render(self.token.expose_secret())
    }

    /// Same as [`Self::to_payload`] with the application token masked, for logging.
    pub fn to_redacted_payload(&self) -> Map<String, Value> {
        self.render("<redacted>")
    }

    fn render(&self, token: &str) -> Map<String, Value> {
        let mut payload = Map::new();
        let mut put = |key: &str, value: String| {
            payload.insert(key.to_string(), Value::String(value));
        };

        put("token", token.to_string());
        put("user", self.user.clone());
        put("message", self.message.clone());
        if let Some(sound) = &self.sound {
            put("sound", sound.clone());
        }
        if let Some(device) = &self.device {
            put("device", device.clone());
        }
        if let Some(timestamp) = self.timestamp {
            put("timestamp", timestamp.to_string());
        }
        if let Some(title) = &self.title {
            put("title", title.clone());
        }
        if let Some(url) = &self.url {
            put("url", url.clone());
        }
        if let Some(url_title) = &self.url_title {
            put("url_title", url_title.clone());
        }
        put("priority", self.priority.to_string());
        match self.format {
            MessageFormat::Html => put("html", "1".to_string()),
            MessageFormat::Monospace => put("monospace", "1".to_string()),
            MessageFormat::Plain => {}
        }
        payload
    }
}
