// src/message.rs
use serde::{Deserialize, Serialize, de::Error as _};

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub text: String,
}

impl ChatRequest {
    /// Parse an inbound frame. Only a JSON object with a string `text` field is accepted.
    pub fn parse(frame: &str) -> Result<Self, serde_json::Error> {
        let value: serde_json::Value = serde_json::from_str(frame)?;
        if !value.is_object() {
            return Err(serde_json::Error::custom("expected a JSON object with a `text` field"));
        }
        ChatRequest::deserialize(value)
    }
}

/// One reply frame. Serializes to either `{"text": ...}` or `{"error": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChatResponse {
    Success { text: String },
    Failure { error: String },
}

impl ChatResponse {
    pub fn success(text: impl Into<String>) -> Self {
        ChatResponse::Success { text: text.into() }
    }

    pub fn failure(error: impl ToString) -> Self {
        ChatResponse::Failure { error: error.to_string() }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, ChatResponse::Failure { .. })
    }
}
