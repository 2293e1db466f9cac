//! GitHub token format checks and credential resolution.
//!
//! A token is accepted when it starts with one of [`TOKEN_PREFIXES`] and is
//! longer than [`MIN_TOKEN_LENGTH`] characters. The check is case-sensitive
//! and does not trim; callers trim first if they want to.

use secrecy::{ExposeSecret, SecretString};

use crate::error::{Error, Result};

/// Prefixes of the GitHub token kinds accepted as credentials.
pub const TOKEN_PREFIXES: [&str; 4] = ["ghp_", "gho_", "ghu_", "ghs_"];

/// Tokens must be strictly longer than this many characters.
pub const MIN_TOKEN_LENGTH: usize = 10;

/// Environment variable consulted when no token is given explicitly.
pub const DEFAULT_TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Returns whether `token` looks like a GitHub token.
///
/// ```
/// use ghmistral::validate_token_format;
///
/// assert!(validate_token_format("ghp_1234567890abcdef"));
/// assert!(!validate_token_format("ghp_short"));
/// assert!(!validate_token_format("invalid_token"));
/// assert!(!validate_token_format(""));
/// ```
#[must_use]
pub fn validate_token_format(token: &str) -> bool {
    TOKEN_PREFIXES.iter().any(|prefix| token.starts_with(prefix))
        && token.chars().count() > MIN_TOKEN_LENGTH
}

/// Like [`validate_token_format`], treating an absent token as invalid.
#[must_use]
pub fn validate_optional_token(token: Option<&str>) -> bool {
    token.is_some_and(validate_token_format)
}

/// A token that passed [`validate_token_format`].
///
/// The value is kept in a [`SecretString`], so `Debug` output never shows it.
#[derive(Clone)]
pub struct Credential(SecretString);

impl Credential {
    /// Validates `token` and wraps it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCredentialFormat`] if the token is rejected.
    pub fn parse(token: SecretString) -> Result<Self> {
        if validate_token_format(token.expose_secret()) {
            Ok(Self(token))
        } else {
            Err(Error::InvalidCredentialFormat)
        }
    }

    /// The raw token. Only call this where the token leaves the process.
    #[must_use]
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }

    /// A copy of the token as a [`SecretString`], for handing to a backend.
    #[must_use]
    pub fn secret(&self) -> SecretString {
        self.0.clone()
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Credential").field(&"[REDACTED]").finish()
    }
}

/// Where to look for a token when none is passed explicitly.
#[derive(Debug, Clone)]
pub enum CredentialSource {
    /// Read the named environment variable at resolution time.
    Env(String),
    /// Use this value.
    Fixed(SecretString),
    /// No fallback.
    None,
}

impl Default for CredentialSource {
    fn default() -> Self {
        Self::Env(DEFAULT_TOKEN_ENV.to_string())
    }
}

impl CredentialSource {
    /// Resolves the token, treating empty values as absent.
    #[must_use]
    pub fn resolve(&self) -> Option<SecretString> {
        let value = match self {
            Self::Env(name) => std::env::var(name).ok().map(SecretString::from),
            Self::Fixed(secret) => Some(secret.clone()),
            Self::None => None,
        };
        value.filter(|secret| !secret.expose_secret().is_empty())
    }

    /// Human-readable description of the source, for setup hints.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Env(name) => format!("{name} environment variable"),
            Self::Fixed(_) => "configured token".to_string(),
            Self::None => "no fallback source".to_string(),
        }
    }
}

/// Picks the explicit token if it is non-empty, otherwise the fallback.
///
/// # Errors
///
/// Returns [`Error::MissingCredential`] when neither yields a non-empty token.
pub fn resolve_credential(
    explicit: Option<SecretString>,
    fallback: &CredentialSource,
) -> Result<SecretString> {
    explicit
        .filter(|secret| !secret.expose_secret().is_empty())
        .or_else(|| fallback.resolve())
        .ok_or(Error::MissingCredential)
}
