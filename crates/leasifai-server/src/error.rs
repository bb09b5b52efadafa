//! API error responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

use leasifai_core::Error as CoreError;

/// An error surfaced to an API caller as `{"error": "..."}` with a status.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }

    /// Map a chat orchestration error to its wire form.
    ///
    /// Validation errors keep their message; provider and parse failures are
    /// logged and masked behind a generic payload.
    pub fn from_chat_error(err: CoreError) -> Self {
        match err {
            CoreError::EmptyConversation | CoreError::MissingDetails => {
                Self::bad_request(err.to_string())
            }
            CoreError::Provider(_) | CoreError::Parse(_) => {
                error!(error = %err, "chat request failed");
                Self::internal("Failed to process chat request")
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorBody {
            error: self.message,
        });
        (self.status, body).into_response()
    }
}
