use std::time::Duration;

use clap::{Args, ValueEnum};

/// Which generation backend to try first at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BackendKind {
    /// OpenAI-compatible `/v1/chat/completions` (Ollama, vLLM, LM Studio, OpenRouter).
    Openai,
    /// Anthropic Messages API.
    Anthropic,
    /// No model; every request uses the rule-based breakdowns.
    Offline,
}

impl BackendKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BackendKind::Openai => "openai",
            BackendKind::Anthropic => "anthropic",
            BackendKind::Offline => "offline",
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct GeneratorConfig {
    /// Generation backend
    #[arg(long, env = "MINDMAP_BACKEND", value_enum, default_value = "openai")]
    pub backend: BackendKind,

    /// Base URL of the model server (defaults depend on the backend)
    #[arg(long, env = "MINDMAP_BASE_URL")]
    pub base_url: Option<String>,

    /// Model name (defaults depend on the backend)
    #[arg(long, env = "MINDMAP_MODEL")]
    pub model: Option<String>,

    /// API key for the model server
    #[arg(long, env = "MINDMAP_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// HTTP timeout for a single generation call (seconds).
    /// Unset means wait as long as the model server takes.
    #[arg(long, env = "MINDMAP_REQUEST_TIMEOUT")]
    pub request_timeout: Option<u64>,

    /// Use the configured backend without the startup reachability check.
    #[arg(long, env = "MINDMAP_SKIP_PREFLIGHT")]
    pub skip_preflight: bool,
}

impl GeneratorConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.request_timeout.map(Duration::from_secs)
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            backend: BackendKind::Openai,
            base_url: None,
            model: None,
            api_key: None,
            request_timeout: None,
            skip_preflight: false,
        }
    }
}
