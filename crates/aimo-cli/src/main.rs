mod cli;
mod config;

use std::io::{self, Write};

use aimo::AimoClient;
use aimo::provider::ChatCompletionProvider as _;
use anyhow::Result;
use clap::Parser;
use cli::Cli;
use config::AppConfig;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout carries only the answers.
    let default_filter = if cli.verbose {
        "warn,aimo_cli=debug,aimo_core=debug,aimo_openai=debug"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let config = AppConfig::load(&cli, |key| std::env::var(key).ok())?;
    tracing::debug!(base_url = %config.base_url, model = %config.model, "configuration loaded");

    run(&cli, &config, io::stdout()).await
}

/// Basic completion, then the streamed one, both written to `out`.
async fn run(cli: &Cli, config: &AppConfig, mut out: impl Write) -> Result<()> {
    let client = AimoClient::new(config.backend()?);

    if !cli.skip_basic {
        let answer = client.chat_complete(config.request(&cli.prompt)).await?;
        writeln!(out, "{}", answer.text())?;
    }

    if !cli.skip_stream {
        writeln!(out, "\n--- Streaming ---")?;
        client
            .stream_to(config.request(&cli.stream_prompt), &mut out)
            .await?;
    }

    Ok(())
}
