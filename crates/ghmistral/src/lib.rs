//! # ghmistral
//!
//! Chat with Mistral models through GitHub Models, authenticated with a
//! GitHub personal access token.
//!
//! The crate has three moving parts:
//! - a token format check ([`validate_token_format`]) run once when a
//!   [`Session`] is built,
//! - a log sanitizer ([`sanitize_message`]) that keeps tokens and API keys
//!   out of log lines,
//! - the chat call itself ([`Session::invoke`]), which turns every remote
//!   failure into a [`ChatResult::Failure`] record instead of an error.
//!
//! ## Quick Start
//!
//! ```no_run
//! use ghmistral::{Config, CredentialSource, GitHubModelsClient, Session};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let session = Session::connect(None, &CredentialSource::default(), |credential| {
//!     GitHubModelsClient::new(Config::default(), credential.secret())
//! })?;
//!
//! let result = session.invoke("Hello, can you help me with a coding question?").await?;
//! match result.text() {
//!     Some(text) => println!("{text}"),
//!     None => eprintln!("{}", result.error().unwrap_or_default()),
//! }
//! # Ok(())
//! # }
//! ```

pub mod credential;
pub mod error;
pub mod invoker;
pub mod sanitize;
pub mod session;

#[cfg(test)]
mod testing;

pub use credential::{
    Credential, CredentialSource, DEFAULT_TOKEN_ENV, validate_optional_token,
    validate_token_format,
};
pub use error::{Error, Result};
pub use invoker::MAX_MESSAGE_LENGTH;
pub use sanitize::{REDACTED_API_KEY, REDACTED_TOKEN, sanitize_message};
pub use session::Session;

pub use ghmistral_client::{ChatBackend, ClientError, GitHubModelsClient};
pub use ghmistral_common::{AVAILABLE_MODELS, ChatResult, Config, DEFAULT_MODEL};
