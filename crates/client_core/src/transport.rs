use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use shared::{
    error::ChatError,
    protocol::{parse_chat_response, ChatRequest, ChatResponse, CHAT_ENDPOINT},
};
use tracing::debug;
use url::Url;

use crate::ChatTransport;

/// Resolves the chat endpoint against a page origin or server base url.
pub fn endpoint_for_origin(origin: &str) -> Result<Url> {
    let base = Url::parse(origin.trim())
        .with_context(|| format!("invalid server url '{origin}'"))?;
    base.join(CHAT_ENDPOINT)
        .with_context(|| format!("failed to join '{CHAT_ENDPOINT}' onto '{origin}'"))
}

pub struct HttpChatTransport {
    http: Client,
    endpoint: Url,
}

impl HttpChatTransport {
    pub fn new(endpoint: Url) -> Self {
        Self {
            http: Client::new(),
            endpoint,
        }
    }

    pub fn for_origin(origin: &str) -> Result<Self> {
        Ok(Self::new(endpoint_for_origin(origin)?))
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait(?Send)]
impl ChatTransport for HttpChatTransport {
    async fn exchange(&self, request: &ChatRequest) -> Result<ChatResponse, ChatError> {
        debug!(endpoint = %self.endpoint, "posting chat message");
        let res = self
            .http
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await
            .map_err(|err| ChatError::Transport(err.to_string()))?;

        // The reply body decides the outcome, whatever the status.
        let status = res.status();
        if !status.is_success() {
            debug!(status = status.as_u16(), "chat endpoint answered with error status");
        }

        let body = res
            .text()
            .await
            .map_err(|err| ChatError::Transport(err.to_string()))?;
        parse_chat_response(&body)
    }
}
