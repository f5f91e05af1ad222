use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::meetings::use_cases::end_meeting::command::EndMeeting;
use crate::shared::core::primitives::GeoPoint;
use crate::shell::payloads::{FilePayload, reject};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct EndMeetingBody {
    pub lead_id: String,
    pub user_id: String,
    pub selfie: FilePayload,
    pub latitude: f64,
    pub longitude: f64,
    pub new_status: i64,
    #[serde(default)]
    pub plan_interest: Option<String>,
    #[serde(default)]
    pub recording: Option<FilePayload>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub next_follow_up_date: Option<NaiveDate>,
}

#[derive(Serialize)]
pub struct EndMeetingResponse {
    pub meeting_id: Uuid,
    pub selfie_url: String,
    pub recording_url: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<EndMeetingBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return reject(StatusCode::UNPROCESSABLE_ENTITY, "invalid request body"),
    };
    let selfie = match body.selfie.into_media_file() {
        Ok(file) => file,
        Err(_) => return reject(StatusCode::UNPROCESSABLE_ENTITY, "selfie is not valid base64"),
    };
    let recording = match body.recording.map(FilePayload::into_media_file).transpose() {
        Ok(recording) => recording,
        Err(_) => {
            return reject(
                StatusCode::UNPROCESSABLE_ENTITY,
                "recording is not valid base64",
            );
        }
    };

    let command = EndMeeting {
        lead_id: body.lead_id,
        acting_user_id: body.user_id,
        selfie,
        location: GeoPoint {
            latitude: body.latitude,
            longitude: body.longitude,
        },
        new_status: body.new_status,
        plan_interest: body.plan_interest,
        recording,
        notes: body.notes,
        next_follow_up_date: body.next_follow_up_date,
    };
    match state.end_meeting.handle(command).await {
        Ok(ended) => Json(EndMeetingResponse {
            meeting_id: ended.meeting.id,
            selfie_url: ended.selfie_url,
            recording_url: ended.recording_url,
        })
        .into_response(),
        Err(err) => err.into_response(),
    }
}
