//! Prompt templates, escalation keywords, and canned assistant replies.
//!
//! All immutable configuration data for the chat orchestrator lives here.

use crate::types::UserRole;

/// Shared base of the assistant system prompt, regardless of user role.
const BASE_SYSTEM_PROMPT: &str = "You are LeasifAI Assistant, an intelligent chatbot designed to help users with lease management and commercial real estate. You are helpful, professional, and knowledgeable about leasing processes.

Key responsibilities:
- Answer questions about lease agreements, terms, and conditions
- Help users navigate the LeasifAI platform features
- Provide guidance on property viewing, contract management, and maintenance issues
- Offer personalized advice based on user role and context
- Maintain a professional and friendly tone
- Be concise and clear in your responses

When you encounter complex issues that require human intervention (legal disputes, contract negotiations, emergency maintenance), clearly indicate that the user should escalate to human support.";

const TENANT_OVERLAY: &str = "

You are assisting a TENANT. Focus on:
- Lease terms and tenant rights
- Maintenance request procedures
- Payment and billing questions
- Move-in/move-out processes
- Property amenities and features
- Dispute resolution procedures";

const LANDLORD_OVERLAY: &str = "

You are assisting a LANDLORD/PROPERTY MANAGER. Focus on:
- Tenant management and communication
- Lease agreement customization
- Property maintenance coordination
- Revenue and financial tracking
- Tenant screening and verification
- Legal compliance and regulations";

/// Build the role-specific system prompt: shared base plus a role overlay.
pub fn system_prompt(user_role: UserRole) -> String {
    let overlay = match user_role {
        UserRole::Tenant => TENANT_OVERLAY,
        UserRole::Landlord => LANDLORD_OVERLAY,
    };
    format!("{BASE_SYSTEM_PROMPT}{overlay}")
}

/// Keywords that route a message to human support instead of the model.
/// Matched as case-insensitive literal substrings, no stemming.
pub const ESCALATION_TRIGGERS: &[&str] = &[
    "legal",
    "lawsuit",
    "dispute",
    "emergency",
    "urgent",
    "critical",
    "breach",
    "violation",
    "eviction",
    "contract negotiation",
    "complex",
    "human support",
    "speak to someone",
    "agent",
];

/// Check whether a message must be escalated to human support.
///
/// Complex or risky topics never reach the model; this gate runs before any
/// provider call.
pub fn requires_escalation(message: &str) -> bool {
    let lower = message.to_lowercase();
    ESCALATION_TRIGGERS
        .iter()
        .any(|keyword| lower.contains(keyword))
}

/// Fixed reply returned when a message is escalated.
pub const ESCALATION_RESPONSE: &str = "I understand this is an important matter. Based on the nature of your question, I recommend connecting with our human support team who can provide specialized assistance. They'll be able to help you with complex issues like this. Would you like me to escalate your case?";

/// Reason attached to an escalated reply.
pub const ESCALATION_REASON: &str = "Complex issue detected";

/// Generic reply when request processing fails.
pub const ERROR_RESPONSE: &str = "Sorry, I encountered an error processing your request. Please try again or contact support if the issue persists.";

/// Reply when the assistant cannot map a question to anything it knows.
pub const NOT_FOUND_RESPONSE: &str = "I'm not sure how to help with that specific question. Could you rephrase it or ask about lease terms, platform features, or property management?";

/// Opening message shown to a user when a conversation starts.
pub fn welcome_message(user_role: UserRole) -> &'static str {
    match user_role {
        UserRole::Tenant => {
            "Welcome to LeasifAI Assistant! I'm here to help you with lease-related questions, platform navigation, and property information. What can I help you with today?"
        }
        UserRole::Landlord => {
            "Welcome to LeasifAI Assistant! I'm here to help you manage your properties, tenants, and leases. What would you like to know?"
        }
    }
}
