use async_trait::async_trait;
use mindmap_core::InputError;
use mindmap_llm::GenerationError;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("{0}")]
    Generation(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<InputError> for ServiceError {
    fn from(e: InputError) -> Self {
        ServiceError::InvalidInput(e.0)
    }
}

impl From<GenerationError> for ServiceError {
    fn from(e: GenerationError) -> Self {
        ServiceError::Generation(e.to_string())
    }
}

/// Abstraction over the two planning operations.
///
/// The HTTP routes and the CLI program against this trait.
/// `LocalPlanner` runs the pipeline in-process.
/// `HttpPlanner` calls a running mindmap-server.
///
/// Both operations return the JSON response body. A successful body may be
/// model-derived or synthesized; callers cannot tell which.
#[async_trait]
pub trait PlanningService: Send + Sync {
    /// `{ "central": ..., "subtopics": [{ "name": ..., "children": [...] }] }`
    async fn generate_mind_map(&self, central_idea: &str) -> Result<Value, ServiceError>;

    /// `{ "subtopics": [{ "name": ... }] }`
    async fn generate_subtopics(&self, topic: &str) -> Result<Value, ServiceError>;
}
