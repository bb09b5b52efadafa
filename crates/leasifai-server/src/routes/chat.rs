//! Assistant chat route.

use axum::{Json, extract::State};
use std::sync::Arc;

use leasifai_core::chat::{ChatReply, ChatRequest};

use crate::error::ApiError;
use crate::state::AppState;

/// Handle a chat request.
///
/// Escalation-worthy messages get the canned escalation reply without a
/// provider call; everything else is answered by the model. Provider
/// failures surface as a generic 500, validation failures as 400.
pub async fn chat(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatReply>, ApiError> {
    let reply = state
        .chat
        .handle(request)
        .await
        .map_err(ApiError::from_chat_error)?;

    Ok(Json(reply))
}
