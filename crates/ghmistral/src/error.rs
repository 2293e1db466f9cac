use thiserror::Error;

/// Errors raised while building a session or before a chat call is made.
///
/// Failures of the remote call itself are never raised; they come back as
/// [`ChatResult::Failure`](ghmistral_common::ChatResult::Failure).
#[derive(Error, Debug)]
pub enum Error {
    #[error("GitHub token is required. Set the token environment variable or pass it directly.")]
    MissingCredential,

    #[error(
        "Invalid GitHub token format. Expected a token starting with ghp_, gho_, ghu_ or ghs_."
    )]
    InvalidCredentialFormat,

    #[error("Unable to initialize Mistral client: {0}")]
    ConnectionFailure(#[source] anyhow::Error),

    #[error("Not connected to Mistral AI")]
    NotConnected,

    #[error("Message cannot be empty")]
    EmptyMessage,

    #[error("Message too long: {length} characters (max {max})")]
    MessageTooLong { length: usize, max: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
