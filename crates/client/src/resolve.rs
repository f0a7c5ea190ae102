//! Resolution of configured alert values against event records.
//!
//! A configured value is an operator-supplied string that is either a
//! literal or the name of a field in the current event. There is no syntax to
//! tell the two apart: the event is consulted first and the string is used
//! literally only when no non-empty field of that name exists. An operator
//! whose literal text happens to equal a field name gets the field's value.
//!
//! # Invariants
//! - A non-empty event value always wins over the literal
//! - Empty configured values resolve to the caller's default
//! - Coercions never guess: unparseable integers are errors

use tracing::debug;

use crate::error::{ClientError, Result};
use crate::models::EventRecord;
use crate::payload::Priority;

/// Strings that coerce to `true` (compared trimmed and lower-cased).
const TRUE_VALUES: [&str; 6] = ["1", "t", "true", "y", "yes", "on"];

/// Resolve `configured` against `event`, falling back to `default`.
pub fn resolve_value(
    configured: Option<&str>,
    event: &EventRecord,
    default: Option<&str>,
) -> Option<String> {
    let Some(configured) = configured else {
        return default.map(str::to_string);
    };
    if let Some(event_value) = event.get(configured).filter(|v| !v.is_empty()) {
        return Some(event_value.clone());
    }
    if !configured.is_empty() {
        return Some(configured.to_string());
    }
    default.map(str::to_string)
}

/// Interpret a resolved string as a boolean flag. Absent is `false`.
pub fn parse_bool(value: Option<&str>) -> bool {
    value.is_some_and(|v| TRUE_VALUES.contains(&v.trim().to_lowercase().as_str()))
}

/// Parse an optional integer. Empty or absent is `None`.
pub fn parse_int(field: &str, value: Option<&str>) -> Result<Option<i64>> {
    match value {
        None | Some("") => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ClientError::InvalidInteger {
                field: field.to_string(),
                value: raw.to_string(),
            }),
    }
}

/// Parse a priority. Empty or absent yields `default`.
pub fn parse_priority(value: Option<&str>, default: Priority) -> Result<Priority> {
    match parse_int("priority", value)? {
        Some(value) => Priority::new(value),
        None => Ok(default),
    }
}

/// Resolves configured values for one event, logging each resolution.
#[derive(Debug, Clone, Copy)]
pub struct ValueResolver<'a> {
    event: &'a EventRecord,
}

impl<'a> ValueResolver<'a> {
    pub fn new(event: &'a EventRecord) -> Self {
        Self { event }
    }

    /// Resolve a field with a fallback default.
    pub fn resolve(
        &self,
        field: &str,
        configured: Option<&str>,
        default: Option<&str>,
    ) -> Option<String> {
        let resolved = resolve_value(configured, self.event, default);
        let from_event = configured.is_some_and(|c| {
            self.event.get(c).is_some_and(|v| !v.is_empty())
        });
        debug!(
            field,
            source = if from_event { "event" } else { "configuration" },
            resolved = resolved.as_deref().unwrap_or(""),
            "Resolved alert value"
        );
        resolved
    }

    /// Resolve a field with no default.
    pub fn value(&self, field: &str, configured: Option<&str>) -> Option<String> {
        self.resolve(field, configured, None)
    }

    /// Resolve a field and coerce it to a boolean.
    pub fn flag(&self, field: &str, configured: Option<&str>) -> bool {
        parse_bool(self.value(field, configured).as_deref())
    }

    /// Resolve a field and coerce it to an optional integer.
    pub fn integer(&self, field: &str, configured: Option<&str>) -> Result<Option<i64>> {
        parse_int(field, self.value(field, configured).as_deref())
    }

    /// Resolve the priority field, defaulting to normal priority.
    pub fn priority(&self, configured: Option<&str>) -> Result<Priority> {
        parse_priority(self.value("priority", configured).as_deref(), Priority::default())
    }
}
