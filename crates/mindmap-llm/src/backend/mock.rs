use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use super::Generator;
use crate::error::GenerationError;

/// A mock backend for testing that returns a preconfigured reply and
/// records how it was called.
pub struct MockBackend {
    reply: Result<String, String>,
    calls: AtomicUsize,
    last_prompt: Mutex<Option<String>>,
    last_max_tokens: Mutex<Option<u32>>,
}

impl MockBackend {
    /// Create a mock that returns `text` from every `generate` call.
    pub fn reply(text: &str) -> Self {
        Self::with_result(Ok(text.to_string()))
    }

    /// Create a mock whose `generate` calls fail with `message`.
    pub fn failure(message: &str) -> Self {
        Self::with_result(Err(message.to_string()))
    }

    fn with_result(reply: Result<String, String>) -> Self {
        Self {
            reply,
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
            last_max_tokens: Mutex::new(None),
        }
    }

    /// Number of `generate` calls made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt.lock().ok().and_then(|p| p.clone())
    }

    pub fn last_max_tokens(&self) -> Option<u32> {
        self.last_max_tokens.lock().ok().and_then(|t| *t)
    }
}

#[async_trait]
impl Generator for MockBackend {
    fn name(&self) -> &str {
        "mock"
    }

    async fn preflight_check(&self) -> Result<(), GenerationError> {
        Ok(())
    }

    async fn generate(&self, prompt: &str, max_tokens: u32) -> Result<String, GenerationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut last) = self.last_prompt.lock() {
            *last = Some(prompt.to_string());
        }
        if let Ok(mut last) = self.last_max_tokens.lock() {
            *last = Some(max_tokens);
        }
        self.reply
            .clone()
            .map_err(GenerationError::Unavailable)
    }
}
