use crate::errors::ChatError;
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openai;

/// Anything that can turn one prompt into one completion
#[async_trait]
pub trait CompletionProvider: Debug + Send + Sync {
    async fn send(&self, prompt: &str) -> Result<String, ChatError>;
}
