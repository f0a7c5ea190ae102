//! Application limits endpoint (`GET /apps/limits.json`).

use std::time::Duration;

use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};

use crate::endpoints::response::interpret_body;
use crate::error::{ClientError, Result};
use crate::models::AppLimits;

/// Get the monthly message limits of the application owning `token`.
pub async fn get_app_limits(
    client: &Client,
    api_url: &str,
    token: &SecretString,
    timeout: Duration,
) -> Result<AppLimits> {
    let url = format!("{}/apps/limits.json", api_url);

    let response = client
        .get(&url)
        .query(&[("token", token.expose_secret())])
        .send()
        .await
        .map_err(|e| ClientError::from_send_error(e, &url, timeout))?;
    let body = response
        .text()
        .await
        .map_err(|e| ClientError::from_send_error(e, &url, timeout))?;

    let (parsed, _) = interpret_body(&body)?;
    serde_json::from_value(parsed)
        .map_err(|e| ClientError::InvalidResponse(format!("Failed to parse app limits: {}", e)))
}
