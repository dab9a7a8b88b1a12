use async_stream::try_stream;

use futures_core::Stream;
use futures_util::StreamExt;
use reqwest::{
    Client as HttpClient, Response,
    header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue},
};
use std::time::Duration;
use tracing::{debug, trace};

use crate::{
    api_v1::{ChatCompletionChunkResponse, ChatCompletionRequest, ChatCompletionResponse},
    error::OpenAiError,
    sse::{DONE_MARKER, SseDecoder},
};

/// AiMo Network devnet router.
pub const DEFAULT_BASE_URL: &str = "https://devnet.aimo.network/api/v1";

/// Upper bound for a non-streaming round-trip.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Minimal HTTP client for an OpenAI-compatible *chat/completions* endpoint.
///
/// * One request ▶ one response, or one request ▶ a stream of chunks.
/// * Accepts and returns the `api_v1` request / response structs defined
///   in this crate.
/// * Shares a single `reqwest::Client`, so cloning `OpenAiClient` is cheap.
#[derive(Clone)]
pub struct OpenAiClient {
    api_key: String,
    http: HttpClient,
    base: String,
    timeout: Duration,
}

impl std::fmt::Debug for OpenAiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiClient")
            .field("base", &self.base)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl OpenAiClient {
    /// Convenience constructor building a default `reqwest` client with
    /// Rustls TLS, talking to [`DEFAULT_BASE_URL`].
    pub fn new(api_key: impl Into<String>) -> Result<Self, OpenAiError> {
        let http = HttpClient::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .build()?;

        Ok(Self::with_http(api_key, http, None))
    }

    /// Build with a custom `reqwest::Client` in case the caller needs proxy
    /// settings, custom TLS, etc.
    pub fn with_http(
        api_key: impl Into<String>,
        http: HttpClient,
        base_url: Option<String>,
    ) -> Self {
        let base = base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_owned());
        Self {
            api_key: api_key.into(),
            http,
            base: base.trim_end_matches('/').to_owned(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base = base_url.into().trim_end_matches('/').to_owned();
        self
    }

    /// Timeout applied to non-streaming calls. Streams are bounded only by
    /// the connect timeout; cancel them by dropping the stream.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base)
    }

    fn headers(accept: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static(accept));
        headers
    }

    /// Perform a **non-streaming** chat completion.
    pub async fn chat_completion(
        &self,
        mut request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, OpenAiError> {
        request.stream = None;

        let url = self.endpoint();
        debug!(%url, model = %request.model, "sending chat completion request");

        let resp = self
            .http
            .post(url)
            .headers(Self::headers("application/json"))
            .bearer_auth(&self.api_key)
            .timeout(self.timeout)
            .json(&request)
            .send()
            .await?;

        let resp = ensure_success(resp).await?;

        let bytes = resp.bytes().await?;
        let parsed: ChatCompletionResponse = serde_json::from_slice(&bytes)?;
        debug!(choices = parsed.choices.len(), "chat completion received");
        Ok(parsed)
    }

    /// Perform a **streaming** chat completion.
    ///
    /// Chunks are yielded in the order the server sends them. The stream ends
    /// at the `[DONE]` marker or when the body closes, whichever comes first.
    pub fn chat_completion_stream(
        &self,
        mut request: ChatCompletionRequest,
    ) -> impl Stream<Item = Result<ChatCompletionChunkResponse, OpenAiError>> + '_ {
        request.stream = Some(true);

        let url = self.endpoint();

        try_stream! {
            debug!(%url, model = %request.model, "opening chat completion stream");

            let resp = self
                .http
                .post(url)
                .headers(Self::headers("text/event-stream"))
                .bearer_auth(&self.api_key)
                .json(&request)
                .send()
                .await?;

            let resp = ensure_success(resp).await?;

            let mut bytes_stream = resp.bytes_stream();
            let mut decoder = SseDecoder::default();

            while let Some(chunk) = bytes_stream.next().await {
                let chunk = chunk?;
                decoder.push(&chunk);

                while let Some(data) = decoder.next_data()? {
                    if data.trim() == DONE_MARKER {
                        debug!("chat completion stream finished");
                        return;
                    }
                    trace!(%data, "sse frame");
                    yield parse_chunk(&data)?;
                }
            }

            if let Some(data) = decoder.finish()? {
                if data.trim() != DONE_MARKER {
                    yield parse_chunk(&data)?;
                }
            }
            debug!("chat completion stream closed by server");
        }
    }
}

async fn ensure_success(resp: Response) -> Result<Response, OpenAiError> {
    let status = resp.status();
    if status.is_success() {
        debug!(%status, "response status");
        return Ok(resp);
    }

    let body = resp.text().await.unwrap_or_default();
    debug!(%status, %body, "request rejected");
    Err(OpenAiError::Api { status, body })
}

fn parse_chunk(data: &str) -> Result<ChatCompletionChunkResponse, OpenAiError> {
    let mut chunk: ChatCompletionChunkResponse = serde_json::from_str(data.trim())?;
    if let Some(error) = chunk.error.take() {
        return Err(OpenAiError::Stream(error.message));
    }
    Ok(chunk)
}
