use aimo_core::error::AimoError;
use aimo_core::generic::{GenericMessage, GenericRole};
use aimo_core::provider::{ChatCompleteParameters, DEFAULT_MAX_TOKENS};
use serde::{Deserialize, Serialize};

use crate::impl_builder_methods;
use crate::model_map::map_model;

use super::common;

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatCompletionMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream: Option<bool>,
}

impl ChatCompletionRequest {
    pub fn new(model: String, messages: Vec<ChatCompletionMessage>) -> Self {
        Self {
            model,
            messages,
            max_tokens: None,
            temperature: None,
            stream: None,
        }
    }
}

impl_builder_methods!(
    ChatCompletionRequest,
    max_tokens: u32,
    temperature: f64,
    stream: bool
);

impl<M> TryFrom<ChatCompleteParameters<M>> for ChatCompletionRequest
where
    M: Into<ChatCompletionMessage> + Clone,
{
    type Error = AimoError;

    fn try_from(value: ChatCompleteParameters<M>) -> Result<Self, Self::Error> {
        let max_tokens = value.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS);
        if max_tokens == 0 {
            return Err(AimoError::InvalidRequest(
                "max_tokens must be a positive integer".into(),
            ));
        }

        if value.messages.is_empty() {
            return Err(AimoError::InvalidRequest(
                "a chat request needs at least one message".into(),
            ));
        }

        Ok(Self {
            model: map_model(&value.model).into_owned(),
            messages: value.messages.into_iter().map(Into::into).collect(),
            max_tokens: Some(max_tokens),
            temperature: value.temperature,
            stream: None,
        })
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MessageRole {
    User,
    System,
    Assistant,
}

fn assistant_role() -> MessageRole {
    MessageRole::Assistant
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ChatCompletionMessage {
    pub role: MessageRole,
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChatCompletionMessageForResponse {
    #[serde(default = "assistant_role")]
    pub role: MessageRole,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

impl From<ChatCompletionMessageForResponse> for GenericMessage {
    fn from(value: ChatCompletionMessageForResponse) -> Self {
        GenericMessage {
            content: value.content,
            role: value.role.into(),
            name: value.name,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionChoice {
    #[serde(default)]
    pub index: i64,
    pub message: ChatCompletionMessageForResponse,
    pub finish_reason: Option<FinishReason>,
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    pub id: Option<String>,
    #[serde(default)]
    pub object: String,
    #[serde(default)]
    pub created: i64,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub choices: Vec<ChatCompletionChoice>,
    pub usage: Option<common::Usage>,
    pub system_fingerprint: Option<String>,
}

/// Why the model stopped. Routers forward provider-specific values, those
/// land in [`FinishReason::Other`].
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FinishReason {
    Stop,
    Length,
    ContentFilter,
    ToolCalls,
    FunctionCall,
    #[serde(other)]
    Other,
}

impl From<GenericRole> for MessageRole {
    fn from(value: GenericRole) -> Self {
        match value {
            GenericRole::System => MessageRole::System,
            GenericRole::Assistant => MessageRole::Assistant,
            GenericRole::User => MessageRole::User,
        }
    }
}

impl From<MessageRole> for GenericRole {
    fn from(value: MessageRole) -> Self {
        match value {
            MessageRole::User => GenericRole::User,
            MessageRole::System => GenericRole::System,
            MessageRole::Assistant => GenericRole::Assistant,
        }
    }
}

impl From<GenericMessage> for ChatCompletionMessage {
    fn from(value: GenericMessage) -> Self {
        Self {
            role: value.role.into(),
            content: value.content,
            name: value.name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aimo_core::model::{Model, OpenAiModel};
    use serde_json::json;

    fn params(max_tokens: Option<u32>) -> ChatCompleteParameters<GenericMessage> {
        let mut params = ChatCompleteParameters::new(
            vec![GenericMessage::user("What is AiMo Network?")],
            Model::OpenAi(OpenAiModel::Gpt4o),
        );
        params.max_tokens = max_tokens;
        params
    }

    #[test]
    fn request_body_matches_wire_format() {
        let request = ChatCompletionRequest::try_from(params(None)).unwrap();

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "model": "openai/gpt-4o",
                "messages": [{ "role": "user", "content": "What is AiMo Network?" }],
                "max_tokens": 256,
            })
        );
    }

    #[test]
    fn explicit_max_tokens_and_stream_flag_are_sent() {
        let request = ChatCompletionRequest::try_from(params(Some(64)))
            .unwrap()
            .stream(true);
        let body = serde_json::to_value(&request).unwrap();

        assert_eq!(body["max_tokens"], 64);
        assert_eq!(body["stream"], true);
    }

    #[test]
    fn zero_max_tokens_is_rejected() {
        let err = ChatCompletionRequest::try_from(params(Some(0))).unwrap_err();
        assert!(matches!(err, AimoError::InvalidRequest(_)));
    }

    #[test]
    fn empty_conversation_is_rejected() {
        let params = ChatCompleteParameters::<GenericMessage>::new(Vec::new(), Model::default());
        let err = ChatCompletionRequest::try_from(params).unwrap_err();
        assert!(matches!(err, AimoError::InvalidRequest(_)));
    }

    #[test]
    fn response_with_null_content_and_unknown_finish_reason_parses() {
        let response: ChatCompletionResponse = serde_json::from_value(json!({
            "id": "gen-1",
            "choices": [{
                "message": { "role": "assistant", "content": null },
                "finish_reason": "eos"
            }]
        }))
        .unwrap();

        let choice = &response.choices[0];
        assert_eq!(choice.finish_reason, Some(FinishReason::Other));
        assert_eq!(choice.message.content, None);
        assert!(response.usage.is_none());
    }
}
