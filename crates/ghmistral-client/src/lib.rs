//! # ghmistral-client
//!
//! Client library for Mistral chat models served through the GitHub Models
//! inference endpoint.
//!
//! The [`ChatBackend`] trait is the seam the rest of the workspace talks to;
//! [`GitHubModelsClient`] is the HTTP implementation of it.
//!
//! ## Example
//!
//! ```no_run
//! use ghmistral_client::{ChatBackend, GitHubModelsClient};
//! use ghmistral_common::{ChatRequest, Config};
//! use secrecy::SecretString;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let token = SecretString::from("ghp_your_token_here".to_string());
//! let client = GitHubModelsClient::new(Config::default(), token)?;
//!
//! let request = ChatRequest::single_user("mistral-tiny", "Hello, world!");
//! let response = client.chat(&request).await?;
//! println!("Response: {:?}", response.first_text());
//! # Ok(())
//! # }
//! ```

use anyhow::Result;
use async_trait::async_trait;

use ghmistral_common::{ChatRequest, ChatResponse, Config};

pub mod error;
pub mod github;

pub use error::ClientError;
pub use github::GitHubModelsClient;

/// A remote chat-completion service.
///
/// Implementations send one request and return the provider's response.
/// Callers only see `Ok(response)` or an error describing why the call failed.
#[must_use = "ChatBackend must be used to make requests"]
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Get the backend's configuration.
    fn config(&self) -> &Config;

    /// Send a chat completion request.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Network communication fails
    /// - The API returns an error (authentication, rate limit, etc.)
    /// - The response cannot be parsed
    async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse>;
}

#[async_trait]
impl<T: ChatBackend + ?Sized> ChatBackend for Box<T> {
    fn config(&self) -> &Config {
        (**self).config()
    }

    async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse> {
        (**self).chat(request).await
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use ghmistral_common::{ChatChoice, ChatMessage};

    struct EchoBackend {
        config: Config,
    }

    #[async_trait]
    impl ChatBackend for EchoBackend {
        fn config(&self) -> &Config {
            &self.config
        }

        async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse> {
            let last = request.messages.last().map(|m| m.content.clone());
            Ok(ChatResponse {
                response_id: None,
                model: request.model.clone(),
                choices: vec![ChatChoice {
                    index: 0,
                    message: ChatMessage::assistant(last.unwrap_or_default()),
                    finish_reason: Some("stop".to_string()),
                }],
                usage: None,
            })
        }
    }

    #[tokio::test]
    async fn test_boxed_backend_delegates() {
        let backend: Box<dyn ChatBackend> = Box::new(EchoBackend {
            config: Config::new("mistral-small"),
        });

        assert_eq!(backend.config().model, "mistral-small");

        let request = ChatRequest::single_user("mistral-small", "ping");
        let response = backend.chat(&request).await.unwrap();
        assert_eq!(response.first_text(), Some("ping"));
        assert_eq!(response.model, "mistral-small");
    }
}
