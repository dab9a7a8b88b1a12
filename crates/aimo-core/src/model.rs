//! Model identifiers used throughout the **aimo** workspace.
//!
//! The AiMo router addresses models as `"provider/model"` (for example
//! `"openai/gpt-4o"`). A handful of well-known models get a dedicated enum
//! variant so application code does not have to type literal strings; any
//! other router id goes through [`Model::Custom`].
//!
//! # Adding more models
//!
//! 1. Add the variant to the sub-enum (`OpenAiModel`, …).
//! 2. Update the mapping function in the provider crate
//!    (`aimo-openai::model_map::map_model`).
//!
//! # Example
//!
//! ```rust
//! use aimo_core::model::{Model, OpenAiModel};
//! assert_eq!(Model::from(OpenAiModel::Gpt4oMini),
//!            Model::OpenAi(OpenAiModel::Gpt4oMini));
//! assert_eq!(Model::from("anthropic/claude-sonnet-4"),
//!            Model::Custom("anthropic/claude-sonnet-4".into()));
//! ```
use std::borrow::Cow;
use std::fmt::Display;

/// Universal identifier for an LLM model.
///
/// * `OpenAi` – Enumerated list of well-known OpenAI models.
/// * `Custom` – Any fully qualified router model id not covered by a
///   dedicated enum.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    /// Built-in OpenAI models (chat completion API).
    OpenAi(OpenAiModel),
    /// Fully qualified router model id (`"provider/model-name"`).
    Custom(Cow<'static, str>),
}

impl Default for Model {
    fn default() -> Self {
        Model::OpenAi(OpenAiModel::Gpt4o)
    }
}

/// Short list of OpenAI models with a dedicated variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpenAiModel {
    Gpt5,
    Gpt5Mini,
    Gpt5Nano,
    Gpt4o,
    Gpt4oMini,
    O3,
    O3Mini,
    O4Mini,
}

impl From<OpenAiModel> for Model {
    fn from(val: OpenAiModel) -> Self {
        Model::OpenAi(val)
    }
}

impl From<&'static str> for Model {
    fn from(val: &'static str) -> Self {
        Model::Custom(Cow::Borrowed(val))
    }
}

impl From<String> for Model {
    fn from(val: String) -> Self {
        Model::Custom(Cow::Owned(val))
    }
}

impl Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Model::OpenAi(model) => write!(f, "{model:?}"),
            Model::Custom(id) => f.write_str(id),
        }
    }
}
