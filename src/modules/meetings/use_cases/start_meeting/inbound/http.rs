use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::meetings::use_cases::start_meeting::command::StartMeeting;
use crate::shared::core::primitives::GeoPoint;
use crate::shell::payloads::{FilePayload, reject};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct StartMeetingBody {
    pub lead_id: String,
    pub user_id: String,
    pub selfie: FilePayload,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Serialize)]
pub struct StartMeetingResponse {
    pub meeting_id: Uuid,
    pub selfie_url: String,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<StartMeetingBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return reject(StatusCode::UNPROCESSABLE_ENTITY, "invalid request body"),
    };
    let selfie = match body.selfie.into_media_file() {
        Ok(file) => file,
        Err(_) => return reject(StatusCode::UNPROCESSABLE_ENTITY, "selfie is not valid base64"),
    };
    let command = StartMeeting {
        lead_id: body.lead_id,
        acting_user_id: body.user_id,
        selfie,
        location: GeoPoint {
            latitude: body.latitude,
            longitude: body.longitude,
        },
    };
    match state.start_meeting.handle(command).await {
        Ok(started) => (
            StatusCode::CREATED,
            Json(StartMeetingResponse {
                meeting_id: started.meeting.id,
                selfie_url: started.selfie_url,
            }),
        )
            .into_response(),
        Err(err) => err.into_response(),
    }
}
