//! Client configuration and request/response types.
//!
//! These types are provider-neutral: the HTTP client converts them to and from
//! the wire format of the chat-completions endpoint.

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::chat::ChatMessage;

/// Model used when the caller does not name one.
pub const DEFAULT_MODEL: &str = "mistral-tiny";

/// Models this client knows how to address, in display order.
pub const AVAILABLE_MODELS: [&str; 4] = [
    "mistral-tiny",
    "mistral-small",
    "mistral-medium",
    "mistral-large",
];

/// Inference endpoint for GitHub Models.
pub const DEFAULT_BASE_URL: &str = "https://models.github.ai/inference";

/// Configuration for a chat backend.
///
/// ```
/// use ghmistral_common::Config;
///
/// let config = Config::new("mistral-small")
///     .with_base_url("http://localhost:8080")
///     .with_timeout_seconds(30);
///
/// assert_eq!(config.model, "mistral-small");
/// assert_eq!(config.base_url(), "http://localhost:8080");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// The default model identifier.
    pub model: String,
    /// Optional custom base URL; [`DEFAULT_BASE_URL`] when unset.
    pub base_url: Option<String>,
    /// Request timeout in seconds. `None` waits indefinitely.
    pub timeout_seconds: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            base_url: None,
            timeout_seconds: None,
        }
    }
}

impl Config {
    /// Creates a configuration for the given default model.
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    #[must_use]
    pub const fn with_timeout_seconds(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = Some(timeout_seconds);
        self
    }

    /// The effective base URL, without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or(DEFAULT_BASE_URL)
            .trim_end_matches('/')
    }
}

/// A chat-completion request.
///
/// ```
/// use ghmistral_common::{ChatMessage, ChatRequest};
///
/// let request = ChatRequest::builder()
///     .model("mistral-tiny")
///     .messages(vec![ChatMessage::user("Hello")])
///     .build();
///
/// assert_eq!(request.messages.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct ChatRequest {
    /// Model identifier to generate with.
    #[builder(setter(into))]
    pub model: String,
    /// Conversation turns, oldest first.
    pub messages: Vec<ChatMessage>,
    /// Sampling temperature.
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    /// Maximum number of tokens to generate.
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

impl ChatRequest {
    /// A request carrying a single user-authored turn.
    pub fn single_user(model: impl Into<String>, content: impl Into<String>) -> Self {
        Self::builder()
            .model(model)
            .messages(vec![ChatMessage::user(content)])
            .build()
    }
}

/// Token usage reported by the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// One completion alternative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatChoice {
    /// Position of this choice in the response.
    pub index: u32,
    /// The generated message.
    pub message: ChatMessage,
    /// Why generation stopped, as reported by the provider.
    pub finish_reason: Option<String>,
}

/// A chat-completion response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Provider-assigned response id.
    pub response_id: Option<String>,
    /// Model that produced the response.
    pub model: String,
    /// Completion alternatives, in provider order.
    pub choices: Vec<ChatChoice>,
    /// Token accounting, if reported.
    pub usage: Option<Usage>,
}

impl ChatResponse {
    /// Text of the first choice, if there is one.
    #[must_use]
    pub fn first_text(&self) -> Option<&str> {
        self.choices.first().map(|choice| choice.message.content.as_str())
    }
}
