//! Unified error type exposed by **`aimo-core`**.
//!
//! Provider crates should convert their internal errors into one of these
//! variants before bubbling them up to the [`AimoClient`](crate::AimoClient).
//! This keeps the public API small while still conveying rich diagnostic
//! information.

use thiserror::Error;

/// Convenient alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, AimoError>;

#[derive(Debug, Error)]
pub enum AimoError {
    /// A required configuration value (usually the API key environment
    /// variable) was not supplied. Raised before any request is attempted.
    #[error("missing configuration: `{key}` is not set")]
    MissingConfiguration { key: &'static str },

    /// Writing streamed output to the local sink failed.
    #[error("output error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic forwarding of any backend-specific error that doesn’t fit another
    /// category.
    #[error("backend returned an error: {0}")]
    Backend(Box<dyn std::error::Error + Send + Sync + 'static>),

    #[error("invalid request: {0}")]
    InvalidRequest(String),
}
