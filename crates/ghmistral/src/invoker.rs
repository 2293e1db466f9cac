//! Sending chat messages through a [`Session`].

use log::{error, info, warn};

use ghmistral_client::ChatBackend;
use ghmistral_common::{AVAILABLE_MODELS, ChatRequest, ChatResult};

use crate::error::{Error, Result};
use crate::sanitize::sanitize_message;
use crate::session::Session;

/// Longest accepted message, in characters, after trimming.
pub const MAX_MESSAGE_LENGTH: usize = 10_000;

/// Characters of the sanitized message included in the request log line.
const LOG_PREVIEW_CHARS: usize = 100;

/// Message sent by [`Session::health_check`].
pub const HEALTH_CHECK_MESSAGE: &str = "Hello";

/// Sanitized message cut to [`LOG_PREVIEW_CHARS`] characters.
fn log_preview(message: &str) -> String {
    sanitize_message(message)
        .chars()
        .take(LOG_PREVIEW_CHARS)
        .collect()
}

impl<B: ChatBackend> Session<B> {
    /// Sends `message` with the session's default model.
    ///
    /// # Errors
    ///
    /// See [`Session::invoke_with_model`].
    pub async fn invoke(&self, message: &str) -> Result<ChatResult> {
        self.invoke_with_model(message, &self.default_model).await
    }

    /// Sends `message` as a single user turn to `model`.
    ///
    /// Leading and trailing whitespace is trimmed before sending. Failures of
    /// the remote call are returned as [`ChatResult::Failure`], not as errors.
    ///
    /// # Errors
    ///
    /// Checked in this order, before anything is sent:
    /// - [`Error::NotConnected`] if the session was disconnected
    /// - [`Error::EmptyMessage`] if the trimmed message is empty
    /// - [`Error::MessageTooLong`] if it exceeds [`MAX_MESSAGE_LENGTH`]
    pub async fn invoke_with_model(&self, message: &str, model: &str) -> Result<ChatResult> {
        if !self.connected {
            return Err(Error::NotConnected);
        }

        let message = message.trim();
        if message.is_empty() {
            return Err(Error::EmptyMessage);
        }

        let length = message.chars().count();
        if length > MAX_MESSAGE_LENGTH {
            return Err(Error::MessageTooLong {
                length,
                max: MAX_MESSAGE_LENGTH,
            });
        }

        info!("Sending message to {model}: {}", log_preview(message));

        let request = ChatRequest::single_user(model, message);

        match self.backend.chat(&request).await {
            Ok(response) => match response.first_text() {
                Some(text) => Ok(ChatResult::success(text, model)),
                None => {
                    warn!("Response from {model} contained no choices");
                    Ok(ChatResult::failure(
                        "Error communicating with Mistral AI: response contained no choices",
                        model,
                    ))
                }
            },
            Err(e) => {
                error!(
                    "Error communicating with Mistral AI: {}",
                    sanitize_message(&e.to_string())
                );
                Ok(ChatResult::failure(
                    format!("Error communicating with Mistral AI: {e}"),
                    model,
                ))
            }
        }
    }

    /// Models this client can address, in display order.
    #[must_use]
    pub const fn available_models() -> &'static [&'static str] {
        &AVAILABLE_MODELS
    }

    /// Sends a trivial message and reports whether it succeeded.
    pub async fn health_check(&self) -> bool {
        match self.invoke(HEALTH_CHECK_MESSAGE).await {
            Ok(result) => result.is_success(),
            Err(e) => {
                error!("Health check failed: {e}");
                false
            }
        }
    }
}
