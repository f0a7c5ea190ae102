//! One-shot send command.
//!
//! The command form sends a single message with explicit arguments instead of
//! resolving templates against events, and reports its outcome as a record
//! rather than failing outwards.

use pushover_config::CredentialStore;
use serde::Serialize;
use tracing::error;

use crate::alert::credentials_for;
use crate::client::PushoverClient;
use crate::error::Result;
use crate::models::SendReceipt;
use crate::payload::{MessageOptions, Priority};

/// Arguments of the send command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SendCommand {
    pub account: String,
    pub message: String,
    pub title: Option<String>,
    pub url: Option<String>,
    pub url_title: Option<String>,
    pub priority: Priority,
    pub sound: Option<String>,
}

/// Result row yielded by the send command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum CommandRecord {
    Success {
        account: String,
        request_id: String,
        api_status: String,
    },
    Error {
        account: String,
        error: String,
    },
}

impl CommandRecord {
    /// Build the record for a finished send.
    pub fn from_result(account: &str, result: &Result<SendReceipt>) -> Self {
        match result {
            Ok(receipt) => Self::Success {
                account: account.to_string(),
                request_id: receipt.request_id.clone().unwrap_or_default(),
                api_status: receipt.status.clone(),
            },
            Err(e) => Self::Error {
                account: account.to_string(),
                error: e.to_string(),
            },
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

impl SendCommand {
    /// Resolve the account, build the message, and send it.
    pub async fn execute<S: CredentialStore + ?Sized>(
        &self,
        store: &S,
        client: &PushoverClient,
    ) -> Result<SendReceipt> {
        let credentials = credentials_for(
            store.credential_by_account_id(&self.account)?,
            &self.account,
        )?;

        let options = MessageOptions {
            title: self.title.clone(),
            url: self.url.clone(),
            url_title: self.url_title.clone(),
            priority: Some(self.priority.into()),
            sound: self.sound.clone(),
            ..MessageOptions::default()
        };

        client
            .send_message(
                credentials.app_token,
                &credentials.user_key,
                &self.message,
                &options,
            )
            .await
    }

    /// Execute and fold the outcome into a [`CommandRecord`].
    pub async fn run<S: CredentialStore + ?Sized>(
        &self,
        store: &S,
        client: &PushoverClient,
    ) -> CommandRecord {
        let result = self.execute(store, client).await;
        if let Err(e) = &result {
            error!(account = %self.account, error = %e, "Failed to send Pushover message");
        }
        CommandRecord::from_result(&self.account, &result)
    }
}
