use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use crate::modules::shifts::core::session::ShiftSession;
use crate::modules::shifts::use_cases::end_shift::command::EndShift;
use crate::shared::core::primitives::GeoPoint;
use crate::shell::payloads::{FilePayload, reject};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct EndShiftBody {
    pub user_id: String,
    pub selfie: FilePayload,
    #[serde(default)]
    pub location: Option<GeoPoint>,
}

#[derive(Serialize)]
pub struct EndShiftResponse {
    pub session: ShiftSession,
    pub selfie_url: String,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<EndShiftBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return reject(StatusCode::UNPROCESSABLE_ENTITY, "invalid request body"),
    };
    let selfie = match body.selfie.into_media_file() {
        Ok(file) => file,
        Err(_) => return reject(StatusCode::UNPROCESSABLE_ENTITY, "selfie is not valid base64"),
    };
    let command = EndShift {
        user_id: body.user_id,
        selfie,
        location: body.location,
    };
    match state.end_shift.handle(command).await {
        Ok(ended) => Json(EndShiftResponse {
            session: ended.session,
            selfie_url: ended.selfie_url,
        })
        .into_response(),
        Err(err) => err.into_response(),
    }
}
