//! CLI settings loaded from TOML.
//!
//! Settings are read from `~/.config/ghmistral/config.toml` unless another
//! path is given with `--config`. Every key is optional.
//!
//! ## Example Configuration
//!
//! ```toml
//! model = "mistral-small"
//! base_url = "https://models.github.ai/inference"
//! timeout_seconds = 60
//! token_env = "GITHUB_TOKEN"
//! demo_messages = [
//!     "Hello, can you help me with a simple coding question?",
//! ]
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use ghmistral::{Config, DEFAULT_MODEL, DEFAULT_TOKEN_ENV};

/// Errors raised while loading settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid setting: {0}")]
    Invalid(String),
}

/// Settings for a CLI run.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Default model for chat messages and the demo
    #[serde(default = "default_model")]
    pub model: String,

    /// Inference endpoint override
    #[serde(default)]
    pub base_url: Option<String>,

    /// Request timeout in seconds (default: none)
    #[serde(default)]
    pub timeout_seconds: Option<u64>,

    /// Environment variable holding the GitHub token
    #[serde(default = "default_token_env")]
    pub token_env: String,

    /// Messages sent during the demo run
    #[serde(default = "default_demo_messages")]
    pub demo_messages: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            model: default_model(),
            base_url: None,
            timeout_seconds: None,
            token_env: default_token_env(),
            demo_messages: default_demo_messages(),
        }
    }
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_token_env() -> String {
    DEFAULT_TOKEN_ENV.to_string()
}

fn default_demo_messages() -> Vec<String> {
    vec![
        "Hello, can you help me with a simple coding question?".to_string(),
        "What are the best practices for writing secure smart contracts?".to_string(),
        "Explain the difference between ERC-20 and ERC-721 tokens.".to_string(),
    ]
}

impl Settings {
    /// Loads settings from `path`, or from the default location.
    ///
    /// A missing file at the default location yields defaults; a missing file
    /// at an explicit path is an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated.
    pub fn load(path: Option<&Path>) -> Result<Self, SettingsError> {
        match path {
            Some(path) if !path.exists() => Err(SettingsError::NotFound(path.to_path_buf())),
            Some(path) => Self::from_file(path),
            None => match Self::config_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Returns the default settings file path, if a config directory exists.
    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("ghmistral").join("config.toml"))
    }

    fn from_file(path: &Path) -> Result<Self, SettingsError> {
        let contents = fs::read_to_string(path)?;
        let settings: Self = toml::from_str(&contents)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Validates the settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the model or token variable name is blank, or the
    /// timeout is zero.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.model.trim().is_empty() {
            return Err(SettingsError::Invalid("model must not be empty".to_string()));
        }
        if self.token_env.trim().is_empty() {
            return Err(SettingsError::Invalid(
                "token_env must not be empty".to_string(),
            ));
        }
        if self.timeout_seconds == Some(0) {
            return Err(SettingsError::Invalid(
                "timeout_seconds must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Applies command-line overrides and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if an override makes the settings invalid.
    pub fn with_overrides(
        mut self,
        model: Option<String>,
        base_url: Option<String>,
    ) -> Result<Self, SettingsError> {
        if let Some(model) = model {
            self.model = model;
        }
        if base_url.is_some() {
            self.base_url = base_url;
        }
        self.validate()?;
        Ok(self)
    }

    /// Backend configuration derived from these settings.
    #[must_use]
    pub fn backend_config(&self) -> Config {
        let mut config = Config::new(&self.model);
        config.base_url.clone_from(&self.base_url);
        config.timeout_seconds = self.timeout_seconds;
        config
    }
}
