use aimo::openai::OpenAiAdapterBuilder;
use aimo::{
    AimoClient,
    generic::{GenericMessage, GenericRole},
    model::{Model, OpenAiModel},
    provider::{ChatCompleteParameters, ChatCompletionProvider as _},
};

/// # Chat Completion – Direct `chat_complete` Example
///
/// Sends one conversation to the AiMo router and prints the whole answer
/// once it has been generated.
///
/// ```bash
/// export AIMO_API_KEY=aimo-sk-v2-…      # mandatory
/// cargo run -p aimo --example aimo_chat_complete
/// ```
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let backend = OpenAiAdapterBuilder::new_from_env().build()?;

    let client = AimoClient::new(backend);

    let messages = vec![
        GenericMessage::new(
            "You are a concise, witty assistant.".into(),
            GenericRole::System,
        ),
        GenericMessage::new("What is AiMo Network?".into(), GenericRole::User),
    ];

    let params = ChatCompleteParameters::new(messages, Model::OpenAi(OpenAiModel::Gpt4o))
        .with_max_tokens(256);

    let response = client.chat_complete(params).await?;

    println!("Assistant: {}", response.text());

    if let Some(usage) = response.usage {
        println!(
            "Tokens – prompt: {}, completion: {}, total: {}",
            usage.prompt_tokens, usage.completion_tokens, usage.total_tokens
        );
    }

    Ok(())
}
