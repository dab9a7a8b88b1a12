use std::borrow::Cow;

use aimo_core::model::{Model, OpenAiModel};

pub const GPT5: &str = "openai/gpt-5";
pub const GPT5_MINI: &str = "openai/gpt-5-mini";
pub const GPT5_NANO: &str = "openai/gpt-5-nano";
pub const GPT4_O: &str = "openai/gpt-4o";
pub const GPT4_O_MINI: &str = "openai/gpt-4o-mini";
pub const O3: &str = "openai/o3";
pub const O3_MINI: &str = "openai/o3-mini";
pub const O4_MINI: &str = "openai/o4-mini";

/// Router model id for `model`. Custom ids are passed through verbatim.
pub(crate) fn map_model(model: &Model) -> Cow<'static, str> {
    let openai_model = match model {
        Model::Custom(custom) => return custom.clone(),
        Model::OpenAi(openai_model) => openai_model,
    };

    match openai_model {
        OpenAiModel::Gpt5 => GPT5.into(),
        OpenAiModel::Gpt5Mini => GPT5_MINI.into(),
        OpenAiModel::Gpt5Nano => GPT5_NANO.into(),
        OpenAiModel::Gpt4o => GPT4_O.into(),
        OpenAiModel::Gpt4oMini => GPT4_O_MINI.into(),
        OpenAiModel::O3 => O3.into(),
        OpenAiModel::O3Mini => O3_MINI.into(),
        OpenAiModel::O4Mini => O4_MINI.into(),
    }
}
