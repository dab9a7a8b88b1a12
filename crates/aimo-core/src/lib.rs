//! # `aimo-core`
//!
//! Provider-agnostic building blocks of the AiMo chat SDK:
//!
//! * [`generic`] – messages, roles, responses and stream fragments,
//! * [`model`] – model identifiers,
//! * [`provider`] – traits a backend implements,
//! * [`AimoClient`] – generic client delegating to one backend,
//! * [`consumer::StreamConsumer`] – writes a streamed answer to a sink as it
//!   arrives,
//! * [`error`] – the unified error type.
pub mod client;
pub mod consumer;
pub mod error;
pub mod generic;
pub mod model;
pub mod provider;

pub use client::AimoClient;
