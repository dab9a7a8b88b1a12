use serde::Deserialize;

use super::{
    chat_completion::{FinishReason, MessageRole},
    common::{ApiErrorDetail, Usage},
};

/// A delta message as returned by the service when `stream = true`.
#[derive(Debug, Deserialize, Default)]
pub struct ChatCompletionMessageDelta {
    #[serde(default)]
    pub role: Option<MessageRole>,
    #[serde(default)]
    pub content: Option<String>,
}

/// A single streaming choice payload.
#[derive(Debug, Deserialize)]
pub struct ChatCompletionChunkChoice {
    #[serde(default)]
    pub index: i64,
    #[serde(default)]
    pub delta: ChatCompletionMessageDelta,
    pub finish_reason: Option<FinishReason>,
}

/// The outermost object sent for each SSE chunk.
///
/// Compatible routers omit several of OpenAI's bookkeeping fields, so only
/// `choices` carries meaning here. A trailing chunk may carry `usage` with no
/// choices, and a failing upstream may send an `error` object in-band.
#[derive(Debug, Deserialize)]
pub struct ChatCompletionChunkResponse {
    pub id: Option<String>,
    #[serde(default)]
    pub object: String,
    #[serde(default)]
    pub created: i64,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub choices: Vec<ChatCompletionChunkChoice>,
    pub usage: Option<Usage>,
    pub error: Option<ApiErrorDetail>,
}
