use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatErrorKind {
    Transport,
    InvalidBody,
    MalformedResponse,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChatError {
    #[error("chat request failed: {0}")]
    Transport(String),
    #[error("chat reply is not valid JSON: {0}")]
    InvalidBody(String),
    #[error("malformed chat reply: {0}")]
    MalformedResponse(String),
}

impl ChatError {
    pub fn kind(&self) -> ChatErrorKind {
        match self {
            Self::Transport(_) => ChatErrorKind::Transport,
            Self::InvalidBody(_) => ChatErrorKind::InvalidBody,
            Self::MalformedResponse(_) => ChatErrorKind::MalformedResponse,
        }
    }
}
