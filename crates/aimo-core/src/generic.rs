//! Generic message and role types used by the *aimo-core* crate.
//!
//! They deliberately mirror the concepts exposed by most provider APIs:
//! “system”, “user” and “assistant”.  By staying minimal and
//! provider-agnostic we can:
//!
//! * convert them into provider-specific structs via a simple `From`/`Into`,
//! * serialize them without pulling in heavyweight dependencies, and
//! * use them in unit tests without mocking a full transport layer.
use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Lightweight container representing a single chat message that is
/// independent of any specific LLM provider.
///
/// * `content` – the raw UTF-8 content. `None` when the provider sent a
///   message without text.
/// * `role` – see [`GenericRole`] for permitted values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GenericMessage {
    pub content: Option<String>,
    pub role: GenericRole,
    pub name: Option<String>,
}

impl GenericMessage {
    /// Convenience constructor mirroring the field order used by common HTTP
    /// APIs (`role`, then `content`).
    ///
    /// ```rust
    /// use aimo_core::generic::{GenericMessage, GenericRole};
    ///
    /// let sys = GenericMessage::new("You are a helpful bot.".into(),
    ///                               GenericRole::System);
    /// ```
    pub fn new(message: String, role: GenericRole) -> Self {
        Self {
            content: Some(message),
            role,
            name: None,
        }
    }

    /// Shorthand for a [`GenericRole::User`] message.
    pub fn user(message: impl Into<String>) -> Self {
        Self::new(message.into(), GenericRole::User)
    }

    /// Shorthand for a [`GenericRole::System`] message.
    pub fn system(message: impl Into<String>) -> Self {
        Self::new(message.into(), GenericRole::System)
    }

    /// Message text, or `""` when the provider returned none.
    pub fn text(&self) -> &str {
        self.content.as_deref().unwrap_or_default()
    }
}

/// High-level chat roles recognised by most LLM providers.
///
/// The `Display` implementation renders the canonical lowercase name so you
/// can feed it directly into JSON without extra mapping logic.
#[derive(Debug, Clone, Serialize, Deserialize, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GenericRole {
    /// “System” messages define global behaviour and style guidelines.
    System,
    /// Messages produced by the assistant / model.
    Assistant,
    /// Messages originating from the human user.
    User,
}

impl Display for GenericRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenericRole::System => write!(f, "system"),
            GenericRole::Assistant => write!(f, "assistant"),
            GenericRole::User => write!(f, "user"),
        }
    }
}

/// The complete answer of a non-streaming chat completion.
#[derive(Debug, Clone)]
pub struct GenericChatCompletionResponse<T> {
    pub content: T,
    pub usage: Option<GenericUsageReport>,
}

impl GenericChatCompletionResponse<GenericMessage> {
    /// Full answer text; missing content is reported as an empty string.
    pub fn text(&self) -> &str {
        self.content.text()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenericUsageReport {
    pub prompt_tokens: i64,
    pub completion_tokens: i64,
    pub total_tokens: i64,
}

/// One incremental piece of a streamed answer.
///
/// Fragments arrive in the order the provider sent them. `text_delta` may be
/// empty (role-only or finish chunks), consumers skip those.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseFragment {
    pub text_delta: String,
}

impl ResponseFragment {
    pub fn new(text_delta: impl Into<String>) -> Self {
        Self {
            text_delta: text_delta.into(),
        }
    }
}

impl AsRef<str> for ResponseFragment {
    fn as_ref(&self) -> &str {
        &self.text_delta
    }
}

impl From<String> for ResponseFragment {
    fn from(text_delta: String) -> Self {
        Self { text_delta }
    }
}

impl From<ResponseFragment> for String {
    fn from(value: ResponseFragment) -> Self {
        value.text_delta
    }
}
