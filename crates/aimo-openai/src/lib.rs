//! OpenAI-compatible chat completion backend for the AiMo chat SDK.
//!
//! [`OpenAiAdapter`] implements the `aimo_core::provider` traits on top of
//! [`OpenAiClient`], a small `reqwest` client for `POST /chat/completions`
//! in both plain JSON and server-sent-event streaming mode.
mod adapter;
mod model_map;
mod provider_impl_chat;
mod provider_impl_chat_stream;
mod sse;

pub use adapter::{API_KEY_ENV, BASE_URL_ENV, OpenAiAdapter, OpenAiAdapterBuilder};
pub use client::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT, OpenAiClient};
pub use model_map::{GPT4_O, GPT4_O_MINI, GPT5, GPT5_MINI, GPT5_NANO, O3, O3_MINI, O4_MINI};
pub mod api_v1;
mod client;
pub mod error;
