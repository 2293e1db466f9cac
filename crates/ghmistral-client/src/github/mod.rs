//! GitHub Models wire types and client implementation.
//!
//! The inference endpoint speaks the OpenAI-compatible chat-completions
//! format; these types mirror the subset of it this client uses.

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use ghmistral_common::{ChatChoice, ChatMessage, ChatRequest, ChatResponse, MessageRole, Usage};

pub mod client;
pub use client::GitHubModelsClient;

/// Request body for `POST /chat/completions`.
///
/// ```
/// use ghmistral_client::github::ChatCompletionRequest;
/// use ghmistral_common::ChatMessage;
///
/// let request = ChatCompletionRequest::builder()
///     .model("mistral-tiny".to_string())
///     .messages(vec![ChatMessage::user("Hello")])
///     .build();
///
/// let json = serde_json::to_value(&request).unwrap();
/// assert!(json.get("temperature").is_none());
/// ```
#[derive(Debug, Clone, Serialize, TypedBuilder)]
pub struct ChatCompletionRequest {
    /// The model identifier to use.
    pub model: String,
    /// The conversation messages.
    pub messages: Vec<ChatMessage>,
    /// Maximum tokens to generate (optional).
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    /// Sampling temperature (optional).
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

impl From<&ChatRequest> for ChatCompletionRequest {
    fn from(request: &ChatRequest) -> Self {
        Self::builder()
            .model(request.model.clone())
            .messages(request.messages.clone())
            .max_tokens(request.max_tokens)
            .temperature(request.temperature)
            .build()
    }
}

/// Message as returned inside a completion choice.
///
/// `content` may be null on the wire.
#[derive(Debug, Clone, Deserialize)]
pub struct CompletionMessage {
    pub role: MessageRole,
    #[serde(default)]
    pub content: Option<String>,
}

/// A single choice from a chat completion response.
#[derive(Debug, Deserialize)]
pub struct CompletionChoice {
    /// The index of this choice in the response array.
    #[serde(default)]
    pub index: u32,
    /// The generated message for this choice.
    pub message: CompletionMessage,
    /// Why generation stopped for this choice.
    pub finish_reason: Option<String>,
}

/// Token usage block of a completion response.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct CompletionUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// Response body for `POST /chat/completions`.
#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    /// Unique identifier for this completion.
    #[serde(default)]
    pub id: Option<String>,
    /// The model that generated the completion.
    pub model: String,
    /// Generated choices.
    pub choices: Vec<CompletionChoice>,
    /// Token usage statistics.
    pub usage: Option<CompletionUsage>,
}

impl From<ChatCompletionResponse> for ChatResponse {
    fn from(response: ChatCompletionResponse) -> Self {
        let choices = response
            .choices
            .into_iter()
            .map(|choice| ChatChoice {
                index: choice.index,
                message: ChatMessage {
                    role: choice.message.role,
                    content: choice.message.content.unwrap_or_default(),
                },
                finish_reason: choice.finish_reason,
            })
            .collect();

        Self {
            response_id: response.id,
            model: response.model,
            choices,
            usage: response.usage.map(|u| Usage {
                prompt_tokens: u.prompt_tokens,
                completion_tokens: u.completion_tokens,
                total_tokens: u.total_tokens,
            }),
        }
    }
}
