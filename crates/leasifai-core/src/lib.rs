//! leasifai-core - Core library for the LeasifAI backend
//!
//! This crate provides the orchestration logic shared by the LeasifAI server:
//!
//! - **types**: wire types for chat turns, property/business descriptors,
//!   and feasibility analyses
//! - **prompts**: system prompt templates, escalation keywords, canned replies
//! - **provider**: the text-generation provider port and OpenAI-compatible client
//! - **chat**: role-aware assistant chat with an escalation gate
//! - **feasibility**: feasibility analysis with a deterministic fallback

pub mod chat;
pub mod error;
pub mod feasibility;
pub mod prompts;
pub mod provider;
pub mod types;

// Re-export commonly used types
pub use error::{Error, Result};
pub use provider::{GenerateRequest, TextGenerator};
