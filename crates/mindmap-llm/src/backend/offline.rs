use async_trait::async_trait;
use tracing::debug;

use super::Generator;
use crate::error::GenerationError;

/// Backend used when no model is reachable. Produces no text, so every
/// request is answered by the rule-based fallback breakdowns.
#[derive(Debug, Default, Clone, Copy)]
pub struct OfflineBackend;

#[async_trait]
impl Generator for OfflineBackend {
    fn name(&self) -> &str {
        "offline"
    }

    async fn preflight_check(&self) -> Result<(), GenerationError> {
        Ok(())
    }

    async fn generate(&self, _prompt: &str, max_tokens: u32) -> Result<String, GenerationError> {
        debug!("offline generator: returning empty text (max_tokens={max_tokens})");
        Ok(String::new())
    }
}
