use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

use crate::{
    config::RelayConfig,
    error::{AppError, Result},
    models::chat::ChatMessage,
};

pub const FALLBACK_REPLY: &str = "Sorry—can you try again?";

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<Value>,
}

pub struct OpenAiClient {
    http: Client,
    api_key: String,
    url: String,
    model: String,
}

impl OpenAiClient {
    /// Fails with [`AppError::MissingCredential`] when no key is configured.
    pub fn from_config(http: Client, config: &RelayConfig) -> Result<Self> {
        let api_key = config
            .openai_api_key
            .clone()
            .ok_or(AppError::MissingCredential("OPENAI_API_KEY"))?;
        Ok(Self { http, api_key, url: config.completions_url(), model: config.openai_model.clone() })
    }

    /// Sends `system` followed by `messages` untouched and returns the first
    /// choice's text, or [`FALLBACK_REPLY`] when the provider returned none.
    pub async fn complete(&self, system: &str, messages: &[Value]) -> Result<String> {
        debug_log_preview(system, messages);
        let mut outbound = Vec::with_capacity(messages.len() + 1);
        outbound.push(serde_json::to_value(ChatMessage::system(system))?);
        outbound.extend(messages.iter().cloned());

        let response = self
            .http
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&CompletionRequest { model: &self.model, messages: outbound })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let data = response.json::<Value>().await.unwrap_or(Value::Null);
            let details = data
                .pointer("/error/message")
                .and_then(Value::as_str)
                .filter(|m| !m.is_empty())
                .unwrap_or("Unknown");
            tracing::warn!(%status, details, "completion request rejected");
            return Err(AppError::Upstream(details.to_string()));
        }

        let data = response.json::<Value>().await?;
        Ok(reply_text(&data).unwrap_or(FALLBACK_REPLY).to_string())
    }
}

fn reply_text(data: &Value) -> Option<&str> {
    data.pointer("/choices/0/message/content")
        .and_then(Value::as_str)
        .filter(|c| !c.is_empty())
}

fn debug_log_preview(system: &str, messages: &[Value]) {
    if std::env::var("DEBUG_OPENAI_RAW").ok().as_deref() == Some("1") {
        let last = messages
            .last()
            .and_then(|m| m.get("content"))
            .and_then(Value::as_str)
            .unwrap_or("");
        tracing::debug!(system.len = system.len(), messages = messages.len(), "outbound completion");
        tracing::debug!(last.preview = %last.chars().take(80).collect::<String>());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reply_text_reads_first_choice() {
        let data = json!({"choices":[{"message":{"role":"assistant","content":"On our way"}}]});
        assert_eq!(reply_text(&data), Some("On our way"));
    }

    #[test]
    fn reply_text_absent_for_empty_or_missing_choices() {
        assert_eq!(reply_text(&json!({"choices":[]})), None);
        assert_eq!(reply_text(&json!({})), None);
        assert_eq!(reply_text(&json!({"choices":[{"message":{"content":null}}]})), None);
        assert_eq!(reply_text(&json!({"choices":[{"message":{"content":""}}]})), None);
    }

    #[test]
    fn missing_key_is_reported() {
        let config = RelayConfig::default();
        let err = OpenAiClient::from_config(Client::new(), &config).err().unwrap();
        assert!(matches!(err, AppError::MissingCredential("OPENAI_API_KEY")));
    }
}
