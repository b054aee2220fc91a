use std::cell::Cell;

use client_core::ChatTransport;
use shared::{
    error::ChatError,
    protocol::{ChatContext, ChatRequest, ChatResponse},
};
use tracing::{debug, error};

use crate::dom::{ChatEntry, Display, EntryId, MessageLog, ValueField, Visible};

pub const PLACEHOLDER_TEXT: &str = "...";
pub const APOLOGY_TEXT: &str = "Sorry, I encountered an error.";
pub const SUBMIT_KEY: &str = "Enter";

pub fn is_submit_key(key: &str) -> bool {
    key == SUBMIT_KEY
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelState {
    Collapsed,
    Open,
}

#[derive(Debug)]
pub enum SendOutcome {
    /// Input was empty after trimming; nothing was appended or sent.
    Skipped,
    Replied,
    Failed(ChatError),
}

/// A message whose user entry and placeholder are already in the log and
/// whose request has not been answered yet.
#[derive(Debug, Clone)]
pub struct PendingReply {
    placeholder: EntryId,
    request: ChatRequest,
}

impl PendingReply {
    pub fn placeholder(&self) -> &EntryId {
        &self.placeholder
    }

    pub fn request(&self) -> &ChatRequest {
        &self.request
    }
}

pub struct ChatWidget<E, L, T> {
    panel: E,
    input: E,
    log: L,
    transport: T,
    context: ChatContext,
    panel_state: Cell<PanelState>,
    next_placeholder: Cell<u64>,
}

impl<E, L, T> ChatWidget<E, L, T>
where
    E: Visible + ValueField,
    L: MessageLog,
    T: ChatTransport,
{
    pub fn new(panel: E, input: E, log: L, transport: T, context: ChatContext) -> Self {
        Self {
            panel,
            input,
            log,
            transport,
            context,
            panel_state: Cell::new(PanelState::Collapsed),
            next_placeholder: Cell::new(0),
        }
    }

    pub fn context(&self) -> &ChatContext {
        &self.context
    }

    pub fn panel_state(&self) -> PanelState {
        self.panel_state.get()
    }

    pub fn open(&self) {
        self.panel.set_display(Display::Flex);
        self.panel_state.set(PanelState::Open);
    }

    pub fn close(&self) {
        self.panel.set_display(Display::None);
        self.panel_state.set(PanelState::Collapsed);
    }

    /// Sends whatever the input holds. The log and input are updated before
    /// the first await; the reply lands whenever the exchange settles.
    pub async fn send_message(&self) -> SendOutcome {
        match self.begin_send() {
            Some(pending) => self.complete_send(pending).await,
            None => SendOutcome::Skipped,
        }
    }

    /// Synchronous half of a send: logs the user text, clears the input and
    /// puts a placeholder in the log. `None` when the trimmed input is empty.
    pub fn begin_send(&self) -> Option<PendingReply> {
        let raw = self.input.value();
        let text = raw.trim();
        if text.is_empty() {
            return None;
        }

        self.append(ChatEntry::user(text));
        self.input.set_value("");

        let placeholder = self.next_placeholder_id();
        self.append(ChatEntry::bot(PLACEHOLDER_TEXT).tagged(placeholder.clone()));

        debug!(placeholder = placeholder.as_str(), "chat message queued");
        Some(PendingReply {
            placeholder,
            request: ChatRequest::new(text, self.context.clone()),
        })
    }

    pub async fn complete_send(&self, pending: PendingReply) -> SendOutcome {
        let result = self.transport.exchange(&pending.request).await;
        self.settle(&pending.placeholder, result)
    }

    fn settle(
        &self,
        placeholder: &EntryId,
        result: Result<ChatResponse, ChatError>,
    ) -> SendOutcome {
        if !self.log.remove(placeholder) {
            debug!(placeholder = placeholder.as_str(), "placeholder already gone");
        }

        match result {
            Ok(reply) => {
                self.append(ChatEntry::bot(reply.response));
                SendOutcome::Replied
            }
            Err(err) => {
                error!(error = %err, kind = ?err.kind(), "chat request failed");
                self.append(ChatEntry::bot(APOLOGY_TEXT));
                SendOutcome::Failed(err)
            }
        }
    }

    fn append(&self, entry: ChatEntry) {
        self.log.append(&entry);
        self.log.scroll_to_latest();
    }

    fn next_placeholder_id(&self) -> EntryId {
        let seq = self.next_placeholder.get() + 1;
        self.next_placeholder.set(seq);
        EntryId::placeholder(seq)
    }
}

#[cfg(test)]
#[path = "tests/chat_tests.rs"]
mod tests;
