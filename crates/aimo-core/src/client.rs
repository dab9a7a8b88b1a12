//! Generic, lightweight client bound to a single concrete backend.
//!
//! The client is **generic over the backend type `B`**, so the compiler
//! guarantees that the message type handed to a call matches what the backend
//! expects, with no dynamic dispatch in user code.
//!
//! Any backend crate (e.g. `aimo-openai`) just implements the provider traits
//! and the same client works out of the box.
use std::io::Write;
use std::sync::Arc;

use crate::{
    consumer::StreamConsumer,
    error::Result,
    generic::{GenericChatCompletionResponse, GenericMessage},
    provider::{ChatCompleteParameters, ChatCompletionProvider, StreamingChatProvider},
};

/// A client bound to a single provider.
///
/// Clone the client if you need to share it across tasks; the backend sits
/// behind an `Arc`.
#[derive(Debug)]
pub struct AimoClient<B> {
    backend: Arc<B>,
}

impl<B> Clone for AimoClient<B> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
        }
    }
}

impl<B> AimoClient<B>
where
    B: ChatCompletionProvider,
{
    /// Create a new client that delegates all calls to `backend`.
    pub fn new(backend: B) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    /// Access the underlying backend (e.g. to tweak provider-specific settings).
    pub fn backend(&self) -> &B {
        &self.backend
    }
}

impl<B> AimoClient<B>
where
    B: StreamingChatProvider,
{
    /// Stream a chat completion straight into `sink`.
    ///
    /// Text is written as it arrives and a single line break is appended once
    /// the stream ends. See [`StreamConsumer`] for the error contract.
    pub async fn stream_to<M, W>(&self, params: ChatCompleteParameters<M>, sink: W) -> Result<()>
    where
        M: Into<B::Message> + Clone + Send + Sync,
        W: Write,
    {
        let stream = self.backend.chat_complete_stream(params);
        StreamConsumer::new(sink).consume(stream).await
    }
}

impl<B: ChatCompletionProvider> ChatCompletionProvider for AimoClient<B> {
    type Message = B::Message;

    fn chat_complete<'p, M>(
        &self,
        params: ChatCompleteParameters<M>,
    ) -> std::pin::Pin<
        Box<
            dyn std::future::Future<Output = Result<GenericChatCompletionResponse<GenericMessage>>>
                + Send
                + 'p,
        >,
    >
    where
        M: Into<Self::Message> + Clone + Send + Sync + 'p,
    {
        self.backend.chat_complete(params)
    }
}

impl<B: StreamingChatProvider> StreamingChatProvider for AimoClient<B> {
    type Delta<'s>
        = B::Delta<'s>
    where
        Self: 's;

    fn chat_complete_stream<'s, M>(&'s self, params: ChatCompleteParameters<M>) -> Self::Delta<'s>
    where
        M: Into<Self::Message> + Clone + Send + Sync + 's,
    {
        self.backend.chat_complete_stream(params)
    }
}
