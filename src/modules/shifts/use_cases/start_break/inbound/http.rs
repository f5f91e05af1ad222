use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::shifts::core::session::BreakKind;
use crate::modules::shifts::use_cases::start_break::command::StartBreak;
use crate::shell::payloads::reject;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct StartBreakBody {
    pub user_id: String,
    #[serde(default)]
    pub kind: BreakKind,
    #[serde(default)]
    pub notes: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<StartBreakBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return reject(StatusCode::UNPROCESSABLE_ENTITY, "invalid request body"),
    };
    let command = StartBreak {
        user_id: body.user_id,
        kind: body.kind,
        notes: body.notes,
    };
    match state.start_break.handle(command).await {
        Ok(record) => (StatusCode::CREATED, Json(record)).into_response(),
        Err(err) => err.into_response(),
    }
}
