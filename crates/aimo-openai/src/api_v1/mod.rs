mod chat_completion;
mod chat_completion_stream;
mod common;

pub use chat_completion::*;
pub use chat_completion_stream::*;
pub use common::{ApiErrorDetail, Usage};
