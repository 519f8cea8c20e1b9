use reqwest::Client;

use crate::{error::Result, models::lead::Lead};

/// Lead intake hook (Zapier catch hook in production). No auth, response body ignored.
pub struct LeadWebhook {
    http: Client,
    url: String,
}

impl LeadWebhook {
    pub fn new(http: Client, url: impl Into<String>) -> Self {
        Self { http, url: url.into() }
    }

    pub async fn forward(&self, lead: &Lead) -> Result<()> {
        self.http
            .post(&self.url)
            .json(lead)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}
