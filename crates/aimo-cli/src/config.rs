use std::time::Duration;

use aimo::error::{AimoError, Result};
use aimo::generic::GenericMessage;
use aimo::model::Model;
use aimo::openai::{API_KEY_ENV, OpenAiAdapter, OpenAiAdapterBuilder};
use aimo::provider::ChatCompleteParameters;

use crate::cli::Cli;

/// Everything needed to talk to the router, resolved once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: Model,
    pub max_tokens: u32,
    pub timeout: Duration,
    pub system: Option<String>,
}

impl AppConfig {
    /// Resolve the configuration; `env` looks up environment variables.
    ///
    /// Fails with [`AimoError::MissingConfiguration`] when no API key is set,
    /// before any request is attempted.
    pub fn load(cli: &Cli, env: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_key = env(API_KEY_ENV)
            .filter(|key| !key.trim().is_empty())
            .ok_or(AimoError::MissingConfiguration { key: API_KEY_ENV })?;

        Ok(Self {
            api_key,
            base_url: cli.base_url.clone(),
            model: Model::from(cli.model.clone()),
            max_tokens: cli.max_tokens,
            timeout: Duration::from_secs(cli.timeout_secs),
            system: cli.system.clone(),
        })
    }

    pub fn backend(&self) -> Result<OpenAiAdapter> {
        OpenAiAdapterBuilder::new()
            .with_api_key(&self.api_key)
            .with_base_url(&self.base_url)
            .with_timeout(self.timeout)
            .build()
    }

    /// A single-turn request for `prompt`.
    pub fn request(&self, prompt: &str) -> ChatCompleteParameters<GenericMessage> {
        let mut messages = Vec::with_capacity(2);
        if let Some(system) = &self.system {
            messages.push(GenericMessage::system(system.as_str()));
        }
        messages.push(GenericMessage::user(prompt));

        ChatCompleteParameters::new(messages, self.model.clone()).with_max_tokens(self.max_tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aimo::generic::GenericRole;
    use clap::Parser;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("aimo-chat").chain(args.iter().copied())).unwrap()
    }

    fn with_key(key: &str) -> Option<String> {
        (key == API_KEY_ENV).then(|| "aimo-sk-v2-test".to_string())
    }

    #[test]
    fn missing_key_fails_before_any_request() {
        let err = AppConfig::load(&cli(&[]), |_| None).unwrap_err();
        assert!(matches!(
            err,
            AimoError::MissingConfiguration { key: API_KEY_ENV }
        ));
    }

    #[test]
    fn request_carries_model_budget_and_system_prompt() {
        let config = AppConfig::load(
            &cli(&["--system", "Be brief.", "--max-tokens", "64"]),
            with_key,
        )
        .unwrap();

        let params = config.request("What is AiMo Network?");

        assert_eq!(params.model, Model::from("openai/gpt-4o"));
        assert_eq!(params.max_tokens, Some(64));
        let roles: Vec<_> = params.messages.iter().map(|m| m.role).collect();
        assert_eq!(roles, vec![GenericRole::System, GenericRole::User]);
        assert_eq!(params.messages[1].text(), "What is AiMo Network?");
    }

    #[test]
    fn backend_builds_from_config() {
        let config = AppConfig::load(&cli(&["--base-url", "http://localhost:9/v1"]), with_key)
            .unwrap();
        let backend = config.backend().unwrap();

        assert_eq!(backend.client().base_url(), "http://localhost:9/v1");
    }
}
