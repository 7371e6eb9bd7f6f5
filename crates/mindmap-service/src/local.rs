use std::sync::Arc;

use async_trait::async_trait;
use mindmap_core::{normalize, require_input, Pipeline};
use mindmap_llm::Generator;
use mindmap_prompts::assemble_prompt;
use serde_json::Value;
use tracing::{error, info, warn};

use crate::{PlanningService, ServiceError};

/// In-process implementation backed by a generation backend.
///
/// Holds no mutable state; one instance can serve concurrent requests.
#[derive(Clone)]
pub struct LocalPlanner {
    generator: Arc<dyn Generator>,
}

impl LocalPlanner {
    pub fn new(generator: Arc<dyn Generator>) -> Self {
        Self { generator }
    }

    pub fn generator_name(&self) -> &str {
        self.generator.name()
    }

    pub fn model_hint(&self) -> Option<&str> {
        self.generator.model_hint()
    }

    /// Input check, prompt, a single generate call, then normalization.
    async fn run(&self, pipeline: Pipeline, input: &str) -> Result<Value, ServiceError> {
        let input = require_input(pipeline, input)?;
        let prompt = assemble_prompt(pipeline, input);

        let raw = self
            .generator
            .generate(&prompt, pipeline.max_tokens())
            .await
            .map_err(|e| {
                error!("{pipeline}: {} generation failed: {e}", self.generator.name());
                e
            })?;

        let normalized = normalize(pipeline, input, &raw);
        match &normalized.rejection {
            Some(reason) => warn!(
                "{pipeline}: {} output rejected ({reason}); using fallback breakdown",
                self.generator.name()
            ),
            None => info!("{pipeline}: accepted {} output", self.generator.name()),
        }
        Ok(normalized.body)
    }
}

#[async_trait]
impl PlanningService for LocalPlanner {
    async fn generate_mind_map(&self, central_idea: &str) -> Result<Value, ServiceError> {
        self.run(Pipeline::MindMap, central_idea).await
    }

    async fn generate_subtopics(&self, topic: &str) -> Result<Value, ServiceError> {
        self.run(Pipeline::Subtopics, topic).await
    }
}
