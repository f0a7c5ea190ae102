//! Data models for Pushover API requests and responses.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One row of alerting data: a flat field-name to string mapping.
pub type EventRecord = BTreeMap<String, String>;

/// Outcome of a successful `messages.json` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendReceipt {
    /// Request id assigned by Pushover, when returned.
    pub request_id: Option<String>,
    /// Raw `status` value of the response rendered as a string.
    pub status: String,
    /// Application message limits reported in the response headers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_limits: Option<AppLimits>,
}

/// Monthly message limits of a Pushover application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppLimits {
    /// Messages allowed per month.
    pub limit: u64,
    /// Messages left this month.
    pub remaining: u64,
    /// Unix timestamp at which `remaining` resets.
    pub reset: i64,
}

impl AppLimits {
    /// Reset time as a UTC datetime, if the timestamp is representable.
    pub fn reset_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.reset, 0)
    }
}
