//! # Streaming Chat Completion – Real-time Example
//!
//! Consumes incremental text fragments from the AiMo router via
//! [`StreamingChatProvider::chat_complete_stream`] and renders them with a
//! [`StreamConsumer`] as soon as they arrive.
//!
//! ```bash
//! export AIMO_API_KEY=aimo-sk-v2-…      # mandatory
//! cargo run -p aimo --example aimo_chat_stream
//! ```
//!
//! You should see the assistant’s reply appear chunk by chunk.

use aimo::openai::OpenAiAdapterBuilder;
use aimo::{
    consumer::StreamConsumer,
    generic::GenericMessage,
    model::Model,
    provider::{ChatCompleteParameters, StreamingChatProvider as _},
};
use std::io::{self, Write};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    // 1. Spin up the backend (needs `AIMO_API_KEY` in the env).
    let backend = OpenAiAdapterBuilder::new_from_env().build()?;

    // 2. Create a tiny conversation.
    let messages = vec![
        GenericMessage::system("You are a real-time narrator. Respond sentence by sentence."),
        GenericMessage::user("Explain decentralized AI in one paragraph."),
    ];

    // 3. Bundle messages + model into `ChatCompleteParameters`.
    let params = ChatCompleteParameters::new(messages, Model::from("openai/gpt-4o"))
        .with_max_tokens(256);

    // 4. Kick off the streaming request.
    let stream = backend.chat_complete_stream(params);

    // 5. Render the assistant’s output as it flows in.
    print!("Assistant: ");
    io::stdout().flush()?;

    StreamConsumer::stdout().consume(stream).await?;

    println!("\nStream finished ✅");
    Ok(())
}
