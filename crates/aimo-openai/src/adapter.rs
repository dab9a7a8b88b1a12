use std::{env, sync::Arc, time::Duration};

use aimo_core::error::{AimoError, Result};

use crate::client::OpenAiClient;

/// Environment variable holding the API credential.
pub const API_KEY_ENV: &str = "AIMO_API_KEY";

/// Optional environment variable overriding the endpoint base URL.
pub const BASE_URL_ENV: &str = "AIMO_BASE_URL";

/// Thin wrapper that wires the HTTP client [`OpenAiClient`] into a value that
/// implements the `aimo_core::provider` traits.
///
/// * stores the API key and base URL,
/// * owns a shareable, connection-pooled `reqwest::Client`,
/// * provides a fluent [`OpenAiAdapterBuilder`] so callers don’t have to juggle
///   `Option<String>` manually.
///
/// User-facing functionality sits on the provider traits and on the generic
/// [`aimo_core::AimoClient`] once the adapter is plugged in.
#[derive(Debug, Clone)]
pub struct OpenAiAdapter {
    pub(crate) client: Arc<OpenAiClient>,
}

impl OpenAiAdapter {
    pub fn from_client(client: OpenAiClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    /// The underlying HTTP client, for calls that need the raw wire types.
    pub fn client(&self) -> &OpenAiClient {
        &self.client
    }
}

/// Builder for [`OpenAiAdapter`].
///
/// # Typical usage
///
/// ```rust,no_run
/// use aimo_openai::OpenAiAdapterBuilder;
///
/// let backend = OpenAiAdapterBuilder::new_from_env()
///     .build()
///     .expect("AIMO_API_KEY must be set");
/// ```
#[derive(Default, Debug)]
pub struct OpenAiAdapterBuilder {
    pub(crate) api_key: Option<String>,
    pub(crate) base_url: Option<String>,
    pub(crate) timeout: Option<Duration>,
}

impl OpenAiAdapterBuilder {
    /// Create an *empty* builder. Remember to supply an API key manually.
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience constructor that loads `AIMO_API_KEY` and, if present,
    /// `AIMO_BASE_URL` from the environment.
    ///
    /// Never panics. Missing keys only surface during [`Self::build`].
    pub fn new_from_env() -> Self {
        Self {
            api_key: env::var(API_KEY_ENV).ok(),
            base_url: env::var(BASE_URL_ENV).ok(),
            timeout: None,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Timeout for non-streaming calls.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Finalise the builder and return a ready-to-use adapter.
    ///
    /// # Errors
    ///
    /// * [`AimoError::MissingConfiguration`] – if the API key is missing or
    ///   empty.
    /// * [`AimoError::Backend`] – if the HTTP client cannot be constructed.
    pub fn build(self) -> Result<OpenAiAdapter> {
        let api_key = self
            .api_key
            .filter(|key| !key.trim().is_empty())
            .ok_or(AimoError::MissingConfiguration { key: API_KEY_ENV })?;

        let mut client = OpenAiClient::new(api_key)?;
        if let Some(base_url) = self.base_url.filter(|url| !url.trim().is_empty()) {
            client = client.with_base_url(base_url);
        }
        if let Some(timeout) = self.timeout {
            client = client.with_timeout(timeout);
        }

        Ok(OpenAiAdapter::from_client(client))
    }
}
