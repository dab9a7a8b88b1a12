use aimo::openai::DEFAULT_BASE_URL;
use aimo::provider::DEFAULT_MAX_TOKENS;
use clap::Parser;

pub const DEFAULT_MODEL: &str = "openai/gpt-4o";

#[derive(Parser, Debug)]
#[command(name = "aimo-chat")]
#[command(version, about = "Chat with models served by AiMo Network")]
pub struct Cli {
    /// Router model id (`provider/model`)
    #[arg(short, long, default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Completion budget per request
    #[arg(long, default_value_t = DEFAULT_MAX_TOKENS, value_parser = clap::value_parser!(u32).range(1..))]
    pub max_tokens: u32,

    /// OpenAI-compatible endpoint base URL
    #[arg(long, env = "AIMO_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Timeout for the basic (non-streaming) request, in seconds
    #[arg(long, default_value_t = 60, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_secs: u64,

    /// Optional system prompt prepended to both conversations
    #[arg(long)]
    pub system: Option<String>,

    /// Prompt for the basic completion
    #[arg(long, default_value = "What is AiMo Network?")]
    pub prompt: String,

    /// Prompt for the streamed completion
    #[arg(long, default_value = "Explain decentralized AI in one paragraph.")]
    pub stream_prompt: String,

    /// Skip the basic completion
    #[arg(long)]
    pub skip_basic: bool,

    /// Skip the streamed completion
    #[arg(long)]
    pub skip_stream: bool,

    /// Enable debug logging for the aimo crates
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_basic_example() {
        let cli = Cli::try_parse_from(["aimo-chat"]).unwrap();

        assert_eq!(cli.model, "openai/gpt-4o");
        assert_eq!(cli.max_tokens, 256);
        assert_eq!(cli.prompt, "What is AiMo Network?");
        assert!(!cli.skip_basic && !cli.skip_stream);
    }

    #[test]
    fn zero_max_tokens_is_rejected() {
        assert!(Cli::try_parse_from(["aimo-chat", "--max-tokens", "0"]).is_err());
    }

    #[test]
    fn zero_timeout_is_rejected() {
        assert!(Cli::try_parse_from(["aimo-chat", "--timeout-secs", "0"]).is_err());

        let cli = Cli::try_parse_from(["aimo-chat", "--timeout-secs", "5"]).unwrap();
        assert_eq!(cli.timeout_secs, 5);
    }

    #[test]
    fn overrides_are_parsed() {
        let cli = Cli::try_parse_from([
            "aimo-chat",
            "-m",
            "deepseek/deepseek-chat",
            "--max-tokens",
            "32",
            "--skip-basic",
            "--stream-prompt",
            "Count to three.",
        ])
        .unwrap();

        assert_eq!(cli.model, "deepseek/deepseek-chat");
        assert_eq!(cli.max_tokens, 32);
        assert!(cli.skip_basic);
        assert_eq!(cli.stream_prompt, "Count to three.");
    }
}
