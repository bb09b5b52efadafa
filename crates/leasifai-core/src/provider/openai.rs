//! OpenAI-compatible provider client.
//!
//! Works against api.openai.com or any chat-completions-compatible endpoint
//! (Azure OpenAI, local Ollama). The API key may be empty for local
//! endpoints.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{GenerateRequest, TextGenerator};
use crate::error::{Error, Result};
use crate::types::{ChatTurn, Role};

/// OpenAI-compatible chat-completions client.
pub struct OpenAiProvider {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
}

impl OpenAiProvider {
    /// Create a new provider client.
    ///
    /// # Arguments
    /// * `api_url` - chat-completions endpoint (e.g. "https://api.openai.com/v1/chat/completions")
    /// * `api_key` - bearer token (may be empty for local endpoints)
    pub fn new(api_url: String, api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
            api_key,
        }
    }
}

/// Chat-completions API request structure.
#[derive(Serialize)]
struct WireRequest {
    model: String,
    messages: Vec<WireMessage>,
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Serialize)]
struct WireMessage {
    role: &'static str,
    content: String,
}

/// Chat-completions API response structure.
#[derive(Deserialize)]
struct WireResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: MessageContent,
}

#[derive(Deserialize)]
struct MessageContent {
    content: String,
}

fn wire_messages(system: Option<&str>, messages: &[ChatTurn]) -> Vec<WireMessage> {
    let mut wire = Vec::with_capacity(messages.len() + 1);
    if let Some(system) = system {
        wire.push(WireMessage {
            role: "system",
            content: system.to_string(),
        });
    }
    for turn in messages {
        wire.push(WireMessage {
            role: match turn.role {
                Role::User => "user",
                Role::Assistant => "assistant",
            },
            content: turn.content.clone(),
        });
    }
    wire
}

#[async_trait::async_trait]
impl TextGenerator for OpenAiProvider {
    async fn generate(&self, request: &GenerateRequest) -> Result<String> {
        let wire = WireRequest {
            model: request.model.clone(),
            messages: wire_messages(request.system.as_deref(), &request.messages),
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        };

        let response = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&wire)
            .send()
            .await
            .map_err(|e| Error::Provider(format!("HTTP request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %text, "provider returned error");
            return Err(Error::Provider(format!(
                "API error {}: {}",
                status,
                text.chars().take(200).collect::<String>()
            )));
        }

        let wire_response: WireResponse = response
            .json()
            .await
            .map_err(|e| Error::Provider(format!("Failed to parse API response: {}", e)))?;

        let content = wire_response
            .choices
            .first()
            .map(|c| c.message.content.clone())
            .ok_or_else(|| Error::Provider("No response choices returned".to_string()))?;

        debug!(raw_len = content.len(), "received provider response");

        Ok(content)
    }
}
