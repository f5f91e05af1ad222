use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;

use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ShiftStatusParams {
    pub user_id: String,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<ShiftStatusParams>,
) -> impl IntoResponse {
    match state.shift_status.handle(&params.user_id).await {
        Ok(status) => Json(status).into_response(),
        Err(err) => err.into_response(),
    }
}
