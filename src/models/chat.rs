use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{AppError, Result};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self { role: "system".into(), content: content.into() }
    }
}

/// Caller-supplied conversation. Messages stay raw JSON so they are relayed
/// exactly as received.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversationRequest {
    pub messages: Vec<Value>,
}

impl ConversationRequest {
    /// Accepts a JSON body, or a form-encoded `payload=<json>` body when the
    /// raw bytes are not JSON.
    pub fn from_body(body: &[u8]) -> Result<Self> {
        match serde_json::from_slice::<Value>(body) {
            Ok(value) => Self::from_value(value),
            Err(_) => Self::from_form(body),
        }
    }

    fn from_form(body: &[u8]) -> Result<Self> {
        let fields: Vec<(String, String)> =
            serde_urlencoded::from_bytes(body).map_err(|_| AppError::InvalidPayload)?;
        let payload = fields
            .into_iter()
            .find(|(k, _)| k == "payload")
            .map(|(_, v)| v)
            .ok_or(AppError::InvalidPayload)?;
        let value = serde_json::from_str::<Value>(&payload).map_err(|_| AppError::InvalidPayload)?;
        Self::from_value(value)
    }

    fn from_value(mut value: Value) -> Result<Self> {
        match value.get_mut("messages").map(Value::take) {
            Some(Value::Array(messages)) => Ok(Self { messages }),
            _ => Err(AppError::InvalidPayload),
        }
    }

    /// All message contents joined with single spaces. Non-string content
    /// contributes an empty string.
    pub fn joined_text(&self) -> String {
        self.messages
            .iter()
            .map(|m| m.get("content").and_then(Value::as_str).unwrap_or(""))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
