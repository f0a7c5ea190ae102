//! Splunk modular alert payload adapter.
//!
//! Responsibilities:
//! - Parse the JSON payload Splunk writes to an alert script's stdin.
//! - Expose it through the [`AlertHost`] trait.
//! - Read result rows from the payload's `results_file`, plain or gzipped CSV.
//!
//! Does NOT handle:
//! - Sending notifications (see `pushover_client::alert`).
//!
//! Invariants:
//! - `results_file` rows take precedence over the single `result` row.
//! - Splunk's multivalue companion columns (`__mv_*`) are not exposed as fields.
//! - Credentials come from the local configuration, never from the payload.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use flate2::read::GzDecoder;
use pushover_client::{AlertHost, EventRecord};
use pushover_config::{AccountRecord, Config, ConfigError, CredentialStore};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info, warn};

/// Prefix Splunk uses for the encoded multivalue column of a field.
const MULTIVALUE_PREFIX: &str = "__mv_";

/// The subset of the alert payload this add-on consumes.
#[derive(Debug, Default, Deserialize)]
struct AlertPayload {
    #[serde(default)]
    configuration: BTreeMap<String, Value>,
    #[serde(default)]
    result: Option<BTreeMap<String, Value>>,
    #[serde(default)]
    results_file: Option<PathBuf>,
    #[serde(default)]
    search_name: Option<String>,
}

/// Payload JSON values rendered as the strings Splunk means them to be.
fn value_to_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Array(items) => items.first().and_then(value_to_string),
        other => Some(other.to_string()),
    }
}

fn to_string_map(values: &BTreeMap<String, Value>) -> BTreeMap<String, String> {
    values
        .iter()
        .filter(|(key, _)| !key.starts_with(MULTIVALUE_PREFIX))
        .filter_map(|(key, value)| value_to_string(value).map(|v| (key.clone(), v)))
        .collect()
}

/// Read event rows from a results file, gunzipping `*.gz` files.
fn read_results_file(path: &Path) -> Result<Vec<EventRecord>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open results file {}", path.display()))?;
    let input: Box<dyn Read> = if path.extension().is_some_and(|ext| ext == "gz") {
        Box::new(GzDecoder::new(file))
    } else {
        Box::new(file)
    };

    let mut reader = csv::Reader::from_reader(input);
    let headers = reader
        .headers()
        .with_context(|| format!("Failed to read CSV headers from {}", path.display()))?
        .clone();

    let mut events = Vec::new();
    for record in reader.records() {
        let record = record
            .with_context(|| format!("Failed to read CSV record from {}", path.display()))?;
        let event: EventRecord = headers
            .iter()
            .zip(record.iter())
            .filter(|(key, _)| !key.starts_with(MULTIVALUE_PREFIX))
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        events.push(event);
    }

    debug!(path = %path.display(), rows = events.len(), "Read results file");
    Ok(events)
}

/// Alert host backed by a Splunk stdin payload and the local account store.
#[derive(Debug)]
pub struct StdinAlertHost<S = Config> {
    params: BTreeMap<String, String>,
    events: Vec<EventRecord>,
    search_name: Option<String>,
    store: S,
}

impl<S: CredentialStore> StdinAlertHost<S> {
    /// Parse a payload from `reader`.
    pub fn from_reader<R: Read>(reader: R, store: S) -> Result<Self> {
        let payload: AlertPayload =
            serde_json::from_reader(reader).context("Failed to parse alert payload JSON")?;

        let file_events = match &payload.results_file {
            Some(path) if path.exists() => Some(read_results_file(path)?),
            Some(path) => {
                warn!(path = %path.display(), "Results file does not exist, using 'result'");
                None
            }
            None => None,
        };
        let events = file_events.unwrap_or_else(|| {
            payload
                .result
                .as_ref()
                .map(|result| vec![to_string_map(result)])
                .unwrap_or_default()
        });

        Ok(Self {
            params: to_string_map(&payload.configuration),
            events,
            search_name: payload.search_name,
            store,
        })
    }
}

impl<S: CredentialStore> AlertHost for StdinAlertHost<S> {
    fn get_param(&self, name: &str) -> Option<String> {
        self.params.get(name).cloned()
    }

    fn get_events(&self) -> Vec<EventRecord> {
        self.events.clone()
    }

    fn get_user_credential_by_account_id(
        &self,
        account_id: &str,
    ) -> Result<Option<AccountRecord>, ConfigError> {
        self.store.credential_by_account_id(account_id)
    }

    fn log_info(&self, message: &str) {
        info!(
            search_name = self.search_name.as_deref().unwrap_or(""),
            "{}", message
        );
    }
}
