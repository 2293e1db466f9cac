//! Test doubles for [`ChatBackend`].

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::Result;
use async_trait::async_trait;

use ghmistral_client::ChatBackend;
use ghmistral_common::{ChatChoice, ChatMessage, ChatRequest, ChatResponse, Config};

enum Reply {
    Text(String),
    Error(String),
    NoChoices,
}

/// Backend that answers every request the same way and records what it saw.
pub struct MockBackend {
    config: Config,
    reply: Reply,
    calls: AtomicUsize,
    requests: Mutex<Vec<ChatRequest>>,
}

impl MockBackend {
    fn new(reply: Reply) -> Self {
        Self {
            config: Config::default(),
            reply,
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn replying(text: &str) -> Self {
        Self::new(Reply::Text(text.to_string()))
    }

    pub fn failing(message: &str) -> Self {
        Self::new(Reply::Error(message.to_string()))
    }

    pub fn without_choices() -> Self {
        Self::new(Reply::NoChoices)
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<ChatRequest> {
        self.requests.lock().ok()?.last().cloned()
    }
}

#[async_trait]
impl ChatBackend for MockBackend {
    fn config(&self) -> &Config {
        &self.config
    }

    async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request.clone());
        }

        match &self.reply {
            Reply::Text(text) => Ok(ChatResponse {
                response_id: Some("mock-response".to_string()),
                model: request.model.clone(),
                choices: vec![ChatChoice {
                    index: 0,
                    message: ChatMessage::assistant(text.clone()),
                    finish_reason: Some("stop".to_string()),
                }],
                usage: None,
            }),
            Reply::Error(message) => Err(anyhow::anyhow!(message.clone())),
            Reply::NoChoices => Ok(ChatResponse {
                response_id: None,
                model: request.model.clone(),
                choices: vec![],
                usage: None,
            }),
        }
    }
}
