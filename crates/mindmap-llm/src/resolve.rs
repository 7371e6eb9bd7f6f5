use std::sync::Arc;

use tracing::{info, warn};

use crate::backend::{AnthropicBackend, Generator, OfflineBackend, OpenAiBackend};
use crate::config::{BackendKind, GeneratorConfig};
use crate::error::GenerationError;

/// Construct the configured backend without contacting it.
pub fn build_primary(config: &GeneratorConfig) -> Result<Arc<dyn Generator>, GenerationError> {
    let timeout = config.timeout();
    let backend: Arc<dyn Generator> = match config.backend {
        BackendKind::Openai => Arc::new(OpenAiBackend::new(
            config
                .base_url
                .as_deref()
                .unwrap_or(OpenAiBackend::DEFAULT_BASE_URL),
            config
                .model
                .as_deref()
                .unwrap_or(OpenAiBackend::DEFAULT_MODEL),
            config.api_key.clone(),
            timeout,
        )?),
        BackendKind::Anthropic => Arc::new(AnthropicBackend::new(
            config
                .base_url
                .as_deref()
                .unwrap_or(AnthropicBackend::DEFAULT_BASE_URL),
            config
                .model
                .as_deref()
                .unwrap_or(AnthropicBackend::DEFAULT_MODEL),
            config.api_key.clone(),
            timeout,
        )?),
        BackendKind::Offline => Arc::new(OfflineBackend),
    };
    Ok(backend)
}

/// Pick the generator for the life of the process.
///
/// Builds the configured backend and runs its preflight check once. Any
/// failure downgrades to [`OfflineBackend`]; this never errors, so the
/// server can always start.
pub async fn resolve_generator(config: &GeneratorConfig) -> Arc<dyn Generator> {
    let primary = match build_primary(config) {
        Ok(backend) => backend,
        Err(e) => {
            warn!("could not build {} backend: {e}; using offline generator", config.backend.as_str());
            return Arc::new(OfflineBackend);
        }
    };

    if config.skip_preflight {
        info!("generator: {} (preflight skipped)", primary.name());
        return primary;
    }

    match primary.preflight_check().await {
        Ok(()) => {
            info!(
                "generator: {} (model={})",
                primary.name(),
                primary.model_hint().unwrap_or("-")
            );
            primary
        }
        Err(e) => {
            warn!("{} preflight failed: {e}; using offline generator", primary.name());
            Arc::new(OfflineBackend)
        }
    }
}
