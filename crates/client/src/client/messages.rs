//! Message delivery methods for [`PushoverClient`].

use secrecy::SecretString;

use crate::client::PushoverClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::SendReceipt;
use crate::payload::{MessageOptions, NotificationRequest};

impl PushoverClient {
    /// Send an already validated notification.
    pub async fn send(&self, request: &NotificationRequest) -> Result<SendReceipt> {
        endpoints::send_message(&self.http, &self.api_url, request, self.timeout).await
    }

    /// Validate and send a notification in one step.
    ///
    /// Validation errors are returned before any network call is made.
    pub async fn send_message(
        &self,
        token: SecretString,
        user: &str,
        message: &str,
        options: &MessageOptions,
    ) -> Result<SendReceipt> {
        let request = NotificationRequest::build(token, user, message, options)?;
        self.send(&request).await
    }
}
