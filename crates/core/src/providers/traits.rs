use async_trait::async_trait;

use crate::errors::CoreError;

/// A single prompt for the generative backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    /// User-turn text
    pub prompt: String,

    /// Optional system instruction (persona, tone)
    pub system_instruction: Option<String>,

    /// Let the backend ground its answer with web search
    pub use_search: bool,
}

impl GenerationRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            system_instruction: None,
            use_search: false,
        }
    }

    pub fn with_system_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.system_instruction = Some(instruction.into());
        self
    }

    pub fn with_search(mut self) -> Self {
        self.use_search = true;
        self
    }
}

/// Trait abstraction for generative-AI backends.
///
/// One round trip: prompt in, text out. Callers never see vendor types, so a
/// backend can be swapped (or mocked in tests) without touching the services.
#[async_trait]
pub trait AiProvider: Send + Sync {
    /// Human-readable name of this provider (for logs/errors).
    fn name(&self) -> &str;

    /// Model identifier requests are sent to.
    fn model(&self) -> &str;

    /// Send one request and return the generated text (possibly empty).
    async fn generate(&self, request: &GenerationRequest) -> Result<String, CoreError>;
}
