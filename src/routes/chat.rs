use axum::{Json, extract::State, extract::rejection::JsonRejection};

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse},
    state::SharedState,
};

pub async fn chat_handler(
    State(state): State<SharedState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let Json(payload) = payload?;
    let context = payload.context.unwrap_or_default();

    let reply = state.relay.relay(&payload.message, &context).await?;

    Ok(Json(ChatResponse { reply }))
}

pub async fn root_handler() -> &'static str {
    "Plant Buddy backend is running"
}
