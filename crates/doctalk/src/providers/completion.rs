//! Completion provider trait for answer synthesis

use async_trait::async_trait;

use crate::error::Result;

/// Trait for the external completion collaborator.
///
/// Implementations:
/// - `OpenAiClient`: OpenAI-compatible chat-completions API
/// - fixed-response fakes in tests
///
/// The credential is supplied by the caller on every invocation and is
/// forwarded as-is; implementations must not persist it.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Produce a completion for an assembled prompt
    async fn complete(&self, prompt: &str, credential: &str) -> Result<String>;

    /// Get provider name for logging
    fn name(&self) -> &str;

    /// Get the model being used
    fn model(&self) -> &str;
}
