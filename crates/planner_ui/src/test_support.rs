use std::{cell::RefCell, collections::VecDeque, rc::Rc};

use async_trait::async_trait;
use client_core::ChatTransport;
use futures::channel::oneshot;
use shared::{
    error::ChatError,
    protocol::{ChatRequest, ChatResponse},
};

pub(crate) type Reply = Result<ChatResponse, ChatError>;

/// Hands out one queued reply per exchange, in call order, and records every
/// request it saw.
#[derive(Default)]
pub(crate) struct ScriptedTransport {
    requests: RefCell<Vec<ChatRequest>>,
    replies: RefCell<VecDeque<oneshot::Receiver<Reply>>>,
}

impl ScriptedTransport {
    pub(crate) fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Queues a reply the test settles later through the returned sender.
    pub(crate) fn defer_reply(&self) -> oneshot::Sender<Reply> {
        let (tx, rx) = oneshot::channel();
        self.replies.borrow_mut().push_back(rx);
        tx
    }

    pub(crate) fn reply_with(&self, reply: Reply) {
        let _ = self.defer_reply().send(reply);
    }

    pub(crate) fn requests(&self) -> Vec<ChatRequest> {
        self.requests.borrow().clone()
    }
}

pub(crate) fn ok(text: &str) -> Reply {
    Ok(ChatResponse {
        response: text.to_string(),
    })
}

#[async_trait(?Send)]
impl ChatTransport for ScriptedTransport {
    async fn exchange(&self, request: &ChatRequest) -> Reply {
        self.requests.borrow_mut().push(request.clone());
        let next = self.replies.borrow_mut().pop_front();
        match next {
            Some(rx) => rx
                .await
                .unwrap_or_else(|_| Err(ChatError::Transport("reply dropped".to_string()))),
            None => Err(ChatError::Transport("no scripted reply".to_string())),
        }
    }
}
