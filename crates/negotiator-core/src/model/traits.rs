use async_trait::async_trait;

use crate::error::ModelError;

/// Every text-generation backend implements this trait.
///
/// A model is stateless between calls and has no side effects beyond its
/// own outbound request, so the same instance can serve concurrent
/// sessions without synchronization.
#[async_trait]
pub trait TextModel: Send + Sync {
    /// Name-addressed model identifier (e.g. "gemini-2.0-flash").
    fn id(&self) -> &str;

    /// Send one prompt, return the completion text.
    async fn generate(&self, prompt: &str) -> Result<String, ModelError>;
}
