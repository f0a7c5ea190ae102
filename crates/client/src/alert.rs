//! Modular alert action processing.
//!
//! Responsibilities:
//! - Define the [`AlertHost`] seam through which the alerting platform
//!   supplies parameters, events, and account records.
//! - Validate mandatory parameters.
//! - Resolve, build, and send one notification per event.
//!
//! Does NOT handle:
//! - Reading the platform's invocation payload (see the CLI's stdin adapter).
//! - Mapping failures to process exit codes.
//!
//! Invariants:
//! - Credentials are looked up once per invocation.
//! - An empty event list is processed as a single empty event.
//! - Events are sent strictly in order; the first failure aborts the rest.

use pushover_config::{
    AccountCredentials, AccountRecord, ConfigError, extract_account_credentials,
};
use tracing::{debug, info};

use crate::client::PushoverClient;
use crate::error::{ClientError, Result};
use crate::models::EventRecord;
use crate::payload::{MessageOptions, NotificationRequest};
use crate::resolve::ValueResolver;

/// Read access to the alerting platform for one alert invocation.
pub trait AlertHost {
    /// Per-alert configured value of a parameter.
    fn get_param(&self, name: &str) -> Option<String>;

    /// Result rows the alert fired for. May be empty.
    fn get_events(&self) -> Vec<EventRecord>;

    /// Account record stored under `account_id`, or `None` if unknown.
    fn get_user_credential_by_account_id(
        &self,
        account_id: &str,
    ) -> std::result::Result<Option<AccountRecord>, ConfigError>;

    /// Progress message for the platform's alert log.
    fn log_info(&self, message: &str) {
        info!("{}", message);
    }
}

/// Turn a credential-store answer into credentials, naming the account when absent.
pub fn credentials_for(
    record: Option<AccountRecord>,
    account: &str,
) -> Result<AccountCredentials> {
    let record = record.ok_or_else(|| ConfigError::AccountNotFound(account.to_string()))?;
    Ok(extract_account_credentials(&record)?)
}

fn required_param<H: AlertHost + ?Sized>(host: &H, name: &str) -> Result<String> {
    host.get_param(name)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| ClientError::MissingParameter(name.to_string()))
}

/// Check that the mandatory `message` and `account` parameters are set.
pub fn validate_params<H: AlertHost + ?Sized>(host: &H) -> Result<()> {
    for name in ["message", "account"] {
        if let Err(err) = required_param(host, name) {
            tracing::error!("{} is a mandatory parameter, but its value is None.", name);
            return Err(err);
        }
    }
    Ok(())
}

/// Configured values read once per invocation, resolved per event.
#[derive(Debug, Clone, Default)]
struct AlertTemplates {
    message: String,
    title: Option<String>,
    url: Option<String>,
    url_title: Option<String>,
    priority: Option<String>,
    sound: Option<String>,
    html: Option<String>,
    monospace: Option<String>,
    timestamp: Option<String>,
    device: Option<String>,
}

impl AlertTemplates {
    fn from_host<H: AlertHost + ?Sized>(host: &H, message: String) -> Self {
        let url = host
            .get_param("url")
            .filter(|url| !url.is_empty())
            .or_else(|| host.get_param("additional_url"));

        Self {
            message,
            title: host.get_param("title"),
            url,
            url_title: host.get_param("url_title"),
            priority: host.get_param("priority"),
            sound: host.get_param("sound"),
            html: host.get_param("html"),
            monospace: host.get_param("monospace"),
            timestamp: host.get_param("timestamp"),
            device: host.get_param("device"),
        }
    }

    fn build_request(
        &self,
        event: &EventRecord,
        credentials: &AccountCredentials,
    ) -> Result<NotificationRequest> {
        let resolver = ValueResolver::new(event);

        let message = resolver
            .value("message", Some(&self.message))
            .ok_or(ClientError::EmptyMessage)?;
        let priority = resolver.priority(self.priority.as_deref())?;

        let options = MessageOptions {
            title: resolver.value("title", self.title.as_deref()),
            url: resolver.value("url", self.url.as_deref()),
            url_title: resolver.value("url_title", self.url_title.as_deref()),
            priority: Some(priority.into()),
            sound: resolver.value("sound", self.sound.as_deref()),
            device: resolver.value("device", self.device.as_deref()),
            timestamp: resolver.integer("timestamp", self.timestamp.as_deref())?,
            html: resolver.flag("html", self.html.as_deref()),
            monospace: resolver.flag("monospace", self.monospace.as_deref()),
        };

        NotificationRequest::build(
            credentials.app_token.clone(),
            credentials.user_key.clone(),
            message,
            &options,
        )
    }
}

/// Send one notification per event of the alert.
///
/// Returns the number of messages sent.
///
/// # Errors
///
/// - [`ClientError::MissingParameter`] if `account` or `message` is unset
/// - [`ClientError::Config`] if the account is unknown or incomplete
/// - any build, transport, or API error of the first event that fails
pub async fn process_event<H: AlertHost + ?Sized>(
    host: &H,
    client: &PushoverClient,
) -> Result<usize> {
    host.log_info("Alert action pushover process_event started.");

    let account = required_param(host, "account")?;
    let message = required_param(host, "message")?;

    let credentials = credentials_for(host.get_user_credential_by_account_id(&account)?, &account)?;
    let templates = AlertTemplates::from_host(host, message);

    let mut events = host.get_events();
    if events.is_empty() {
        events.push(EventRecord::new());
    }

    let mut sent_count = 0;
    for (index, event) in events.iter().enumerate() {
        let request = templates.build_request(event, &credentials)?;
        let receipt = client.send(&request).await?;
        debug!(
            event_index = index,
            request_id = receipt.request_id.as_deref().unwrap_or(""),
            "Pushover message sent"
        );
        sent_count += 1;
    }

    host.log_info(&format!(
        "Sent {} Pushover message(s) using account '{}'.",
        sent_count, account
    ));
    Ok(sent_count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    struct StaticHost {
        params: BTreeMap<String, String>,
    }

    impl AlertHost for StaticHost {
        fn get_param(&self, name: &str) -> Option<String> {
            self.params.get(name).cloned()
        }

        fn get_events(&self) -> Vec<EventRecord> {
            Vec::new()
        }

        fn get_user_credential_by_account_id(
            &self,
            _account_id: &str,
        ) -> std::result::Result<Option<AccountRecord>, ConfigError> {
            Ok(None)
        }
    }

    fn host(pairs: &[(&str, &str)]) -> StaticHost {
        StaticHost {
            params: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    #[test]
    fn test_validate_params() {
        assert!(validate_params(&host(&[("message", "m"), ("account", "a")])).is_ok());

        let err = validate_params(&host(&[("account", "a")])).unwrap_err();
        assert_eq!(err.to_string(), "'message' is required");

        let err = validate_params(&host(&[("message", "m"), ("account", "")])).unwrap_err();
        assert_eq!(err.to_string(), "'account' is required");
    }

    #[test]
    fn test_url_falls_back_to_additional_url() {
        let templates = AlertTemplates::from_host(
            &host(&[("url", ""), ("additional_url", "https://example.com")]),
            "m".to_string(),
        );
        assert_eq!(templates.url.as_deref(), Some("https://example.com"));

        let templates = AlertTemplates::from_host(
            &host(&[("url", "https://a.example"), ("additional_url", "https://b.example")]),
            "m".to_string(),
        );
        assert_eq!(templates.url.as_deref(), Some("https://a.example"));
    }

    #[test]
    fn test_credentials_for_unknown_account() {
        let err = credentials_for(None, "prod").unwrap_err();
        assert_eq!(err.to_string(), "Account 'prod' was not found");
    }

    #[test]
    fn test_build_request_resolves_event_fields() {
        let templates = AlertTemplates {
            message: "message".to_string(),
            priority: Some("priority".to_string()),
            html: Some("1".to_string()),
            timestamp: Some("ts".to_string()),
            ..AlertTemplates::default()
        };
        let event: EventRecord = [
            ("message", "from event"),
            ("priority", "-1"),
            ("ts", "1700000000"),
        ]
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        let credentials = credentials_for(
            Some(
                [("user", "u"), ("app_token", "t")]
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
            ),
            "prod",
        )
        .unwrap();

        let request = templates.build_request(&event, &credentials).unwrap();
        assert_eq!(request.message(), "from event");
        assert_eq!(request.priority().value(), -1);
        assert_eq!(request.timestamp(), Some(1700000000));
        assert_eq!(request.format(), crate::payload::MessageFormat::Html);
        assert_eq!(request.user(), "u");
    }
}
