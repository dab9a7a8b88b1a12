//! # `aimo` – The umbrella crate
//!
//! One-stop import gluing the workspace crates together:
//!
//! | Crate             | What it provides                                                               |
//! |-------------------|--------------------------------------------------------------------------------|
//! | **`aimo-core`**   | Provider traits, generic client, messages, errors and the stream consumer      |
//! | **`aimo-openai`** | HTTP adapter for OpenAI-compatible `/chat/completions` endpoints *(optional)*  |
//!
//! The `openai` Cargo feature (on by default) re-exports the adapter as
//! [`openai`], so a single dependency line is enough:
//!
//! ```toml
//! [dependencies]
//! aimo = "0.1"
//! ```
//!
//! ## Quick example
//!
//! ```rust,no_run
//! use aimo::{
//!     AimoClient,
//!     generic::GenericMessage,
//!     model::Model,
//!     provider::{ChatCompleteParameters, ChatCompletionProvider as _},
//! };
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let backend = aimo::openai::OpenAiAdapterBuilder::new_from_env().build()?;
//!     let client = AimoClient::new(backend);
//!
//!     let ask = |prompt: &str| {
//!         ChatCompleteParameters::new(vec![GenericMessage::user(prompt)], Model::default())
//!             .with_max_tokens(256)
//!     };
//!
//!     let answer = client.chat_complete(ask("What is AiMo Network?")).await?;
//!     println!("{}", answer.text());
//!
//!     client
//!         .stream_to(ask("Explain decentralized AI in one paragraph."), std::io::stdout())
//!         .await?;
//!     Ok(())
//! }
//! ```
#![doc(html_root_url = "https://docs.rs/aimo/latest")]

pub use aimo_core::*;

#[cfg(feature = "openai")]
pub use aimo_openai as openai;
