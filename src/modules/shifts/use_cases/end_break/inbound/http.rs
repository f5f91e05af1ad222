use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::shell::payloads::reject;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct EndBreakBody {
    pub user_id: String,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<EndBreakBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return reject(StatusCode::UNPROCESSABLE_ENTITY, "invalid request body"),
    };
    match state.end_break.handle(&body.user_id).await {
        Ok(record) => Json(record).into_response(),
        Err(err) => err.into_response(),
    }
}
