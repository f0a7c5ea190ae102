//! Application limit methods for [`PushoverClient`].

use secrecy::SecretString;

use crate::client::PushoverClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::AppLimits;

impl PushoverClient {
    /// Get the monthly message limits of the application owning `token`.
    pub async fn app_limits(&self, token: &SecretString) -> Result<AppLimits> {
        endpoints::get_app_limits(&self.http, &self.api_url, token, self.timeout).await
    }
}
