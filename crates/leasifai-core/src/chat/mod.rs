//! Chat orchestration: escalation gate plus role-aware provider calls.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::prompts;
use crate::provider::{GenerateRequest, TextGenerator};
use crate::types::{ChatTurn, PropertyContext, UserRole};

/// Sampling temperature for assistant replies.
const CHAT_TEMPERATURE: f32 = 0.7;
/// Token cap for assistant replies.
const CHAT_MAX_TOKENS: u32 = 500;

/// A chat request: full conversation history plus the requester's role.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    #[serde(default)]
    pub messages: Vec<ChatTurn>,
    pub user_role: UserRole,
    #[serde(default)]
    pub property_context: Option<PropertyContext>,
}

/// The assistant's reply, with escalation routing information.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatReply {
    pub response: String,
    pub requires_escalation: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub escalation_reason: Option<String>,
}

/// Stateless chat orchestrator. One provider call per request, no retries.
pub struct ChatOrchestrator {
    provider: Arc<dyn TextGenerator>,
    model: String,
}

impl ChatOrchestrator {
    pub fn new(provider: Arc<dyn TextGenerator>, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
        }
    }

    /// Handle a chat request.
    ///
    /// Messages whose last turn matches an escalation keyword are answered
    /// with the canned escalation reply without ever reaching the provider.
    pub async fn handle(&self, request: ChatRequest) -> Result<ChatReply> {
        if request.messages.is_empty() {
            return Err(Error::EmptyConversation);
        }

        if let Some(context) = &request.property_context {
            debug!(
                property = context.property_name.as_deref().unwrap_or("unknown"),
                "chat request carries property context"
            );
        }

        let last_user_message = request
            .messages
            .last()
            .map(|turn| turn.content.as_str())
            .unwrap_or_default();

        if prompts::requires_escalation(last_user_message) {
            info!(user_role = ?request.user_role, "escalation keyword detected, skipping provider");
            return Ok(ChatReply {
                response: prompts::ESCALATION_RESPONSE.to_string(),
                requires_escalation: true,
                escalation_reason: Some(prompts::ESCALATION_REASON.to_string()),
            });
        }

        let generate = GenerateRequest {
            model: self.model.clone(),
            system: Some(prompts::system_prompt(request.user_role)),
            messages: request.messages,
            temperature: CHAT_TEMPERATURE,
            max_tokens: Some(CHAT_MAX_TOKENS),
        };

        let response = self.provider.generate(&generate).await?;

        Ok(ChatReply {
            response,
            requires_escalation: false,
            escalation_reason: None,
        })
    }
}
