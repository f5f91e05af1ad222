use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(lead_id): Path<String>,
) -> impl IntoResponse {
    match state.lead_history.handle(&lead_id).await {
        Ok(entries) => Json(entries).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "lead history read failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
