use aimo_core::error::AimoError;
use reqwest::StatusCode;

/// High-level error type covering every failure mode the client can hit.
#[derive(Debug, thiserror::Error)]
pub enum OpenAiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("couldn’t (de)serialise body: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("stream frame is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("API returned non-success status {status}: {body}")]
    Api { status: StatusCode, body: String },

    #[error("stream reported an error: {0}")]
    Stream(String),

    #[error("response format error: {0}")]
    Format(String),
}

impl From<OpenAiError> for AimoError {
    fn from(value: OpenAiError) -> Self {
        AimoError::Backend(Box::new(value))
    }
}
