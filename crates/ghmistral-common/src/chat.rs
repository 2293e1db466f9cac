//! Chat messages and the outcome record of a chat invocation.
//!
//! [`ChatMessage`] and [`MessageRole`] describe a single turn sent to or
//! received from a model. [`ChatResult`] is the two-variant record every
//! invocation produces: callers branch on it instead of handling errors for
//! ordinary API failures.

use serde::{Deserialize, Serialize};

/// The author of a chat message.
///
/// ```
/// use ghmistral_common::chat::MessageRole;
///
/// let role = MessageRole::User;
/// let json = serde_json::to_string(&role).unwrap();
/// assert_eq!(json, "\"user\"");
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum MessageRole {
    /// Instructions that shape the model's behaviour.
    System,
    /// Input from the person at the keyboard.
    User,
    /// Text produced by the model.
    Assistant,
}

/// A single chat turn.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    /// Who wrote this message.
    pub role: MessageRole,
    /// The message text.
    pub content: String,
}

impl ChatMessage {
    /// Creates a user-authored message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }

    /// Creates a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    /// Creates an assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
        }
    }
}

/// Outcome of one chat invocation.
///
/// Exactly one of the two shapes is ever populated. Both carry the model id
/// the request was made with.
///
/// ```
/// use ghmistral_common::ChatResult;
///
/// let ok = ChatResult::success("Hi there", "mistral-tiny");
/// assert!(ok.is_success());
/// assert_eq!(ok.text(), Some("Hi there"));
///
/// let failed = ChatResult::failure("timed out", "mistral-tiny");
/// assert_eq!(failed.error(), Some("timed out"));
/// assert_eq!(failed.model_used(), "mistral-tiny");
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ChatResult {
    /// The model answered.
    Success {
        /// Text of the first completion choice.
        text: String,
        /// Model id the request was made with.
        model_used: String,
    },
    /// The remote call failed; the failure is recorded rather than raised.
    Failure {
        /// Human-readable description including the underlying error text.
        error: String,
        /// Model id the request was made with.
        model_used: String,
    },
}

impl ChatResult {
    /// Builds a success record.
    pub fn success(text: impl Into<String>, model_used: impl Into<String>) -> Self {
        Self::Success {
            text: text.into(),
            model_used: model_used.into(),
        }
    }

    /// Builds a failure record.
    pub fn failure(error: impl Into<String>, model_used: impl Into<String>) -> Self {
        Self::Failure {
            error: error.into(),
            model_used: model_used.into(),
        }
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Response text, if the call succeeded.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Success { text, .. } => Some(text),
            Self::Failure { .. } => None,
        }
    }

    /// Error description, if the call failed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { error, .. } => Some(error),
        }
    }

    #[must_use]
    pub fn model_used(&self) -> &str {
        match self {
            Self::Success { model_used, .. } | Self::Failure { model_used, .. } => model_used,
        }
    }
}
