use reqwest::Client;

use crate::{
    clients::{openai::OpenAiClient, webhook::LeadWebhook},
    config::RelayConfig,
    error::Result,
    models::{chat::ConversationRequest, lead::Lead},
};

/// One per warm function instance; holds the shared HTTP client.
pub struct ChatRelay {
    config: RelayConfig,
    http: Client,
}

impl ChatRelay {
    pub fn new(config: RelayConfig) -> Result<Self> {
        let http = Client::builder().build()?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &RelayConfig {
        &self.config
    }

    /// Handles a POST body: relay to the completion API, then forward any lead.
    pub async fn create_reply(&self, body: &[u8]) -> Result<String> {
        let conversation = ConversationRequest::from_body(body).inspect_err(|_| {
            tracing::info!(body.len = body.len(), "rejected chat payload");
        })?;
        let client = OpenAiClient::from_config(self.http.clone(), &self.config)?;
        let reply = client.complete(&self.config.system_prompt, &conversation.messages).await?;

        let lead = Lead::from_conversation(&conversation);
        if lead.has_contact() {
            self.forward_lead(&lead).await;
        }
        Ok(reply)
    }

    // Delivery failures are logged and never cost the caller their reply.
    async fn forward_lead(&self, lead: &Lead) {
        let webhook = LeadWebhook::new(self.http.clone(), self.config.lead_webhook_url.as_str());
        match webhook.forward(lead).await {
            Ok(()) => tracing::info!(
                has_phone = !lead.phone.is_empty(),
                has_email = !lead.email.is_empty(),
                "lead forwarded"
            ),
            Err(e) => tracing::warn!(error = %e, "lead forwarding failed"),
        }
    }
}
