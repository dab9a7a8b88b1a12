use std::pin::Pin;

use crate::OpenAiAdapter;
use crate::api_v1::ChatCompletionRequest;
use aimo_core::error::{AimoError, Result};
use aimo_core::generic::ResponseFragment;
use aimo_core::provider::{ChatCompleteParameters, StreamingChatProvider};
use futures_core::stream::Stream;
use tracing::debug;

impl StreamingChatProvider for OpenAiAdapter {
    type Delta<'s>
        = Pin<Box<dyn Stream<Item = Result<ResponseFragment>> + Send + 's>>
    where
        Self: 's;

    fn chat_complete_stream<'s, M>(&'s self, params: ChatCompleteParameters<M>) -> Self::Delta<'s>
    where
        M: Into<Self::Message> + Clone + Send + Sync + 's,
    {
        let client = self.client.clone();

        Box::pin(async_stream::try_stream! {
            use futures_util::StreamExt;

            let request: ChatCompletionRequest = params.try_into()?;

            let stream = client.chat_completion_stream(request);
            futures_util::pin_mut!(stream);

            while let Some(chunk) = stream.next().await {
                let chunk = chunk.map_err(AimoError::from)?;

                if let Some(usage) = chunk.usage {
                    debug!(total_tokens = usage.total_tokens, "stream usage");
                }

                // Only the first choice is displayed, matching `chat_complete`.
                for choice in chunk.choices {
                    if choice.index != 0 {
                        continue;
                    }
                    if let Some(reason) = &choice.finish_reason {
                        debug!(?reason, "stream finish reason");
                    }
                    yield ResponseFragment::from(choice.delta.content.unwrap_or_default());
                }
            }
        })
    }
}
