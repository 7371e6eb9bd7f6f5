use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::Generator;
use crate::error::GenerationError;

/// OpenAI-compatible chat completions backend.
///
/// Works with any server exposing `/v1/chat/completions`: Ollama, vLLM,
/// LM Studio, OpenRouter, or OpenAI itself.
pub struct OpenAiBackend {
    /// Server root, without the `/v1` suffix.
    pub base_url: String,
    pub model: String,
    pub api_key: Option<String>,
    client: Client,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

impl OpenAiBackend {
    pub const DEFAULT_BASE_URL: &'static str = "http://127.0.0.1:11434";
    pub const DEFAULT_MODEL: &'static str = "llama3.2";

    pub fn new(
        base_url: &str,
        model: &str,
        api_key: Option<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, GenerationError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            api_key,
            client: builder.build()?,
        })
    }

    fn with_auth(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.api_key {
            Some(key) => builder.header("Authorization", format!("Bearer {key}")),
            None => builder,
        }
    }
}

#[async_trait]
impl Generator for OpenAiBackend {
    fn name(&self) -> &str {
        "openai-compatible"
    }

    fn model_hint(&self) -> Option<&str> {
        Some(&self.model)
    }

    async fn preflight_check(&self) -> Result<(), GenerationError> {
        let resp = self
            .with_auth(self.client.get(format!("{}/v1/models", self.base_url)))
            .send()
            .await
            .map_err(|e| GenerationError::Unavailable(format!("{}: {e}", self.base_url)))?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(GenerationError::Status {
                status: status.as_u16(),
                body,
            });
        }
        info!("openai-compatible: {} reachable (model={})", self.base_url, self.model);
        Ok(())
    }

    async fn generate(&self, prompt: &str, max_tokens: u32) -> Result<String, GenerationError> {
        let request = ChatRequest {
            model: &self.model,
            max_tokens,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
        };
        let resp = self
            .with_auth(
                self.client
                    .post(format!("{}/v1/chat/completions", self.base_url)),
            )
            .json(&request)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(GenerationError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatResponse = resp.json().await?;
        Ok(parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .unwrap_or_default())
    }
}
