use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ChatError;

pub const CHAT_ENDPOINT: &str = "/chat";
pub const DEFAULT_DESTINATION: &str = "Unknown";
pub const DEFAULT_DAYS: &str = "3";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatContext {
    pub destination: String,
    pub days: String,
}

impl ChatContext {
    /// Builds the context from optional page-provided values, each defaulted
    /// on its own.
    pub fn from_page(destination: Option<String>, days: Option<String>) -> Self {
        Self {
            destination: destination.unwrap_or_else(|| DEFAULT_DESTINATION.to_string()),
            days: days.unwrap_or_else(|| DEFAULT_DAYS.to_string()),
        }
    }
}

impl Default for ChatContext {
    fn default() -> Self {
        Self::from_page(None, None)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    pub context: ChatContext,
}

impl ChatRequest {
    pub fn new(message: impl Into<String>, context: ChatContext) -> Self {
        Self {
            message: message.into(),
            context,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

/// Decodes a `/chat` reply body. A body that is not JSON is `InvalidBody`;
/// JSON without a string `response` field is `MalformedResponse`.
pub fn parse_chat_response(body: &str) -> Result<ChatResponse, ChatError> {
    let value: Value =
        serde_json::from_str(body).map_err(|err| ChatError::InvalidBody(err.to_string()))?;
    match value.get("response") {
        Some(Value::String(response)) => Ok(ChatResponse {
            response: response.clone(),
        }),
        Some(other) => Err(ChatError::MalformedResponse(format!(
            "`response` is not a string: {other}"
        ))),
        None => Err(ChatError::MalformedResponse(
            "missing `response` field".to_string(),
        )),
    }
}

#[cfg(test)]
#[path = "tests/protocol_tests.rs"]
mod tests;
