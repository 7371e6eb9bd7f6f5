pub mod anthropic;
pub mod mock;
pub mod offline;
pub mod openai;

use async_trait::async_trait;

use crate::error::GenerationError;

pub use anthropic::AnthropicBackend;
pub use mock::MockBackend;
pub use offline::OfflineBackend;
pub use openai::OpenAiBackend;

/// Trait for text-generation backends.
///
/// Each backend encapsulates:
/// - How to reach the model (HTTP endpoint, credentials, model name)
/// - How to validate that the model is usable at startup
///
/// The trait does NOT handle:
/// - Prompt assembly (handled by mindmap-prompts)
/// - Recovering structure from the returned text (handled by mindmap-core)
///
/// One `generate` call is made per request. Backends do not retry.
#[async_trait]
pub trait Generator: Send + Sync {
    /// Human-readable backend name for logging and health reporting.
    fn name(&self) -> &str;

    /// Optional model hint for logging/display purposes.
    fn model_hint(&self) -> Option<&str> {
        None
    }

    /// Run preflight checks specific to this backend.
    /// Called once at startup.
    async fn preflight_check(&self) -> Result<(), GenerationError>;

    /// Generate text for `prompt`, limited to roughly `max_tokens`.
    ///
    /// Empty or unstructured text is a successful result; only a failed
    /// call is an error.
    async fn generate(&self, prompt: &str, max_tokens: u32) -> Result<String, GenerationError>;
}
