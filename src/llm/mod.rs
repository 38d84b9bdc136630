mod message;
mod providers;

pub use message::*;
pub use providers::openai::OpenAiProvider;
pub use providers::CompletionProvider;
