use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use super::ask;
use crate::errors::{ApiJson, AppError};
use crate::models::DataSource;
use crate::state::AppState;

/// Longest message forwarded to the provider, in characters.
const MAX_MESSAGE_CHARS: usize = 4000;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub reply: String,
    pub source: DataSource,
}

/// POST /api/chat
pub async fn handle_chat(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let message = req.message.trim();
    if message.is_empty() {
        return Err(AppError::Validation("message must not be empty".to_string()));
    }
    if message.chars().count() > MAX_MESSAGE_CHARS {
        return Err(AppError::Validation(format!(
            "message must be at most {MAX_MESSAGE_CHARS} characters"
        )));
    }

    let reply = ask(state.ai.as_ref(), message).await;
    Ok(Json(ChatResponse {
        reply: reply.data,
        source: reply.source,
    }))
}
