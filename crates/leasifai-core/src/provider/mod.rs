//! Text-generation provider port.
//!
//! Both orchestrators consume the provider through this trait: prompt in,
//! text out, may fail. Failure modes are opaque `Error::Provider` values.

mod openai;

pub use openai::OpenAiProvider;

use async_trait::async_trait;

use crate::error::Result;
use crate::types::ChatTurn;

/// A single generation request against a provider.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    /// Model identifier, e.g. "gpt-4o-mini".
    pub model: String,
    /// Optional system prompt prepended to the conversation.
    pub system: Option<String>,
    /// Ordered conversation history. For single-prompt requests this is one
    /// user turn.
    pub messages: Vec<ChatTurn>,
    pub temperature: f32,
    /// Response token cap; provider default when `None`.
    pub max_tokens: Option<u32>,
}

impl GenerateRequest {
    /// Build a single-prompt request with no system prompt.
    pub fn prompt(model: impl Into<String>, prompt: impl Into<String>, temperature: f32) -> Self {
        Self {
            model: model.into(),
            system: None,
            messages: vec![ChatTurn::user(prompt)],
            temperature,
            max_tokens: None,
        }
    }
}

/// Text-generation provider abstraction.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate a completion for the request, returning the raw model text.
    async fn generate(&self, request: &GenerateRequest) -> Result<String>;
}
