//! Message delivery endpoint (`POST /messages.json`).

use std::time::Duration;

use reqwest::Client;
use reqwest::header::HeaderMap;
use tracing::{debug, info};

use crate::endpoints::response::interpret_body;
use crate::error::{ClientError, Result};
use crate::models::{AppLimits, SendReceipt};
use crate::payload::NotificationRequest;

/// Read the `X-Limit-App-*` headers Pushover attaches to message responses.
///
/// Returns `None` unless all three headers are present and numeric.
pub fn parse_limit_headers(headers: &HeaderMap) -> Option<AppLimits> {
    fn header<T: std::str::FromStr>(headers: &HeaderMap, name: &str) -> Option<T> {
        headers.get(name)?.to_str().ok()?.trim().parse().ok()
    }

    Some(AppLimits {
        limit: header(headers, "X-Limit-App-Limit")?,
        remaining: header(headers, "X-Limit-App-Remaining")?,
        reset: header(headers, "X-Limit-App-Reset")?,
    })
}

/// Send one notification.
///
/// The body is interpreted whatever the HTTP status; no retry is attempted.
pub async fn send_message(
    client: &Client,
    api_url: &str,
    request: &NotificationRequest,
    timeout: Duration,
) -> Result<SendReceipt> {
    let url = format!("{}/messages.json", api_url);

    debug!(
        payload = %serde_json::Value::Object(request.to_redacted_payload()),
        "Sending Pushover payload"
    );

    let response = client
        .post(&url)
        .json(&request.to_payload())
        .send()
        .await
        .map_err(|e| ClientError::from_send_error(e, &url, timeout))?;

    let http_status = response.status().as_u16();
    let app_limits = parse_limit_headers(response.headers());
    let body = response
        .text()
        .await
        .map_err(|e| ClientError::from_send_error(e, &url, timeout))?;
    info!(http_status, "Pushover HTTP status");

    let (parsed, status) = interpret_body(&body)?;
    let request_id = parsed
        .get("request")
        .and_then(|r| r.as_str())
        .map(str::to_string);

    Ok(SendReceipt {
        request_id,
        status,
        app_limits,
    })
}
