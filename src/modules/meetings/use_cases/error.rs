use crate::modules::meetings::adapters::outbound::meetings::MeetingStoreError;
use crate::shared::infrastructure::media_gateway::MediaGatewayError;
use crate::shell::payloads::reject;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MeetingError {
    #[error("Meeting already exists")]
    MeetingAlreadyActive,

    #[error("Meeting not found")]
    NoActiveMeeting,

    #[error("Lead not found")]
    LeadNotFound,

    #[error("selfie upload failed: {0}")]
    Upload(#[from] MediaGatewayError),

    #[error("storage error: {0}")]
    Storage(String),
}

impl IntoResponse for MeetingError {
    fn into_response(self) -> Response {
        match self {
            MeetingError::MeetingAlreadyActive | MeetingError::NoActiveMeeting => {
                reject(StatusCode::CONFLICT, self.to_string())
            }
            MeetingError::LeadNotFound => reject(StatusCode::NOT_FOUND, self.to_string()),
            MeetingError::Upload(_) => reject(StatusCode::BAD_GATEWAY, "media upload failed"),
            MeetingError::Storage(detail) => {
                tracing::error!(error = %detail, "meeting operation failed");
                reject(StatusCode::INTERNAL_SERVER_ERROR, "internal error")
            }
        }
    }
}

impl From<MeetingStoreError> for MeetingError {
    fn from(err: MeetingStoreError) -> Self {
        match err {
            MeetingStoreError::OpenMeetingExists => MeetingError::MeetingAlreadyActive,
            MeetingStoreError::NotFound => MeetingError::NoActiveMeeting,
            MeetingStoreError::Backend(detail) => MeetingError::Storage(detail),
        }
    }
}

impl From<anyhow::Error> for MeetingError {
    fn from(err: anyhow::Error) -> Self {
        MeetingError::Storage(err.to_string())
    }
}
