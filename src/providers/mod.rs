mod open_ai;
mod prompt;

pub use open_ai::OpenAIProvider;
pub use prompt::{build_remix_prompt, REMIX_INSTRUCTION};

use async_trait::async_trait;
use std::error::Error;

/// A completion service that turns one prompt into generated text
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Get the provider name (e.g., "openai")
    fn provider_name(&self) -> &str;

    /// Send `prompt` as a single user turn and return the first completion
    async fn complete(&self, prompt: &str) -> Result<String, Box<dyn Error + Send + Sync>>;
}
