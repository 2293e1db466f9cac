//! # ghmistral-common
//!
//! Common types shared by the ghmistral crates:
//! - Chat messages and roles
//! - Provider-neutral request/response records
//! - The [`ChatResult`] outcome record
//! - Backend configuration and the model catalogue
//!
//! ## Example
//!
//! ```
//! use ghmistral_common::{ChatRequest, Config, DEFAULT_MODEL};
//!
//! let config = Config::default();
//! let request = ChatRequest::single_user(&config.model, "Hello!");
//!
//! assert_eq!(request.model, DEFAULT_MODEL);
//! ```

/// Chat messages, roles, and invocation outcomes.
pub mod chat;
/// Backend configuration and request/response types.
pub mod client;

pub use chat::{ChatMessage, ChatResult, MessageRole};
pub use client::{
    AVAILABLE_MODELS, ChatChoice, ChatRequest, ChatResponse, Config, DEFAULT_BASE_URL,
    DEFAULT_MODEL, Usage,
};
