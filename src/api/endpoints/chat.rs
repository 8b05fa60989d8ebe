//! Chat endpoint.
//!
//! `POST /api/chat/analyze` — answer a free-text message through the
//! stage pipeline (canned prompt → condition question → symptom analysis).

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;
use crate::api::types::ApiContext;

#[derive(Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Serialize)]
pub struct ChatResponse {
    pub response: String,
}

/// `POST /api/chat/analyze` — single text reply.
pub async fn analyze(
    State(ctx): State<ApiContext>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let Json(req) = payload?;
    if req.message.chars().count() > ctx.max_message_len {
        return Err(ApiError::BadRequest(format!(
            "Message too long (max {} chars)",
            ctx.max_message_len
        )));
    }

    let response = ctx.responder.respond(&req.message, ctx.store.as_ref());
    tracing::info!(reply_len = response.len(), "Chat message analyzed");

    Ok(Json(ChatResponse { response }))
}
