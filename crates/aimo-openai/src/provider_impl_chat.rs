use std::sync::Arc;

use aimo_core::{
    error::Result,
    generic::{GenericChatCompletionResponse, GenericMessage},
    provider::{ChatCompleteParameters, ChatCompletionProvider},
};
use tracing::debug;

use crate::{
    OpenAiAdapter,
    api_v1::{ChatCompletionMessage, ChatCompletionRequest, FinishReason},
    error::OpenAiError,
};

impl ChatCompletionProvider for OpenAiAdapter {
    type Message = ChatCompletionMessage;

    fn chat_complete<'p, M>(
        &self,
        params: ChatCompleteParameters<M>,
    ) -> std::pin::Pin<
        Box<dyn Future<Output = Result<GenericChatCompletionResponse<GenericMessage>>> + Send + 'p>,
    >
    where
        M: Into<Self::Message> + Clone + Send + Sync + 'p,
    {
        let client = Arc::clone(&self.client);

        Box::pin(async move {
            let request: ChatCompletionRequest = params.try_into()?;

            let response = client.chat_completion(request).await?;

            let usage = response.usage.map(Into::into);

            let Some(first_choice) = response.choices.into_iter().next() else {
                return Err(OpenAiError::Format("response has no choices".into()).into());
            };

            if first_choice.finish_reason == Some(FinishReason::Length) {
                debug!("answer truncated by max_tokens");
            }

            Ok(GenericChatCompletionResponse {
                content: first_choice.message.into(),
                usage,
            })
        })
    }
}
