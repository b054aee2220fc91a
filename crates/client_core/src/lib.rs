use std::rc::Rc;

use async_trait::async_trait;
use shared::{
    error::ChatError,
    protocol::{ChatRequest, ChatResponse},
};

pub mod transport;
pub use transport::{endpoint_for_origin, HttpChatTransport};

/// One request/response exchange with the chat endpoint. Futures are not
/// `Send`: the page runs every exchange on its single event-loop thread.
#[async_trait(?Send)]
pub trait ChatTransport {
    async fn exchange(&self, request: &ChatRequest) -> Result<ChatResponse, ChatError>;
}

#[async_trait(?Send)]
impl<T> ChatTransport for Rc<T>
where
    T: ChatTransport + ?Sized,
{
    async fn exchange(&self, request: &ChatRequest) -> Result<ChatResponse, ChatError> {
        (**self).exchange(request).await
    }
}

/// Stands in when no endpoint could be resolved; every exchange fails.
pub struct MissingChatTransport;

#[async_trait(?Send)]
impl ChatTransport for MissingChatTransport {
    async fn exchange(&self, _request: &ChatRequest) -> Result<ChatResponse, ChatError> {
        Err(ChatError::Transport(
            "chat endpoint is unavailable".to_string(),
        ))
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
