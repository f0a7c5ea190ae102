//! Interpretation of Pushover API response bodies.
//!
//! Every Pushover endpoint answers with a JSON object carrying `status`
//! (`1` on success) and, on failure, an `errors` list. The HTTP status code is
//! not consulted: 4xx answers carry the same JSON shape.

use serde_json::Value;

use crate::error::{ClientError, Result};

/// True when `status` is the integer 1 or the string "1".
pub fn is_success_status(status: &Value) -> bool {
    match status {
        Value::Number(n) => n.as_i64() == Some(1),
        Value::String(s) => s == "1",
        _ => false,
    }
}

fn render_status(status: &Value) -> String {
    match status {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// False for `null`, blank strings and empty arrays or objects.
fn has_content(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.trim().is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
        _ => true,
    }
}

fn render_errors(errors: &Value) -> Vec<String> {
    match errors {
        Value::Array(items) => items
            .iter()
            .filter(|item| has_content(item))
            .map(|item| match item {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect(),
        Value::String(s) => vec![s.clone()],
        other => vec![other.to_string()],
    }
}

/// Parse a response body and check its status.
///
/// Returns the parsed object and the status rendered as a string.
///
/// # Errors
///
/// - [`ClientError::InvalidResponse`] with the raw text if the body is not JSON
/// - [`ClientError::MissingStatus`] if there is no `status` field
/// - [`ClientError::Rejected`] if the status is not success and `errors` is present
/// - [`ClientError::UnexpectedStatus`] if the status is not success otherwise
pub fn interpret_body(body: &str) -> Result<(Value, String)> {
    let parsed: Value =
        serde_json::from_str(body).map_err(|_| ClientError::InvalidResponse(body.to_string()))?;

    let status = parsed
        .get("status")
        .ok_or_else(|| ClientError::MissingStatus(parsed.to_string()))?;

    if !is_success_status(status) {
        let errors = parsed
            .get("errors")
            .filter(|errors| has_content(errors))
            .map(render_errors)
            .filter(|errors| !errors.is_empty());
        return Err(match errors {
            Some(errors) => ClientError::Rejected(errors),
            None => ClientError::UnexpectedStatus(render_status(status)),
        });
    }

    let status = render_status(status);
    Ok((parsed, status))
}
