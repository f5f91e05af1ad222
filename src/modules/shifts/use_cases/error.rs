use crate::modules::shifts::adapters::outbound::sessions::SessionStoreError;
use crate::shared::infrastructure::media_gateway::MediaGatewayError;
use crate::shell::payloads::reject;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Tracker-level failures. The messages are the user-visible rejection
/// reasons; inbound maps the invariant arms to 4xx.
#[derive(Debug, Error)]
pub enum ShiftError {
    #[error("Shift already started today but not ended")]
    AlreadyActive,

    #[error("No active shift")]
    NoActiveShift,

    #[error("Break already active")]
    BreakAlreadyActive,

    #[error("No break to end")]
    NoBreakToEnd,

    #[error("selfie upload failed: {0}")]
    Upload(#[from] MediaGatewayError),

    #[error("storage error: {0}")]
    Storage(String),
}

impl IntoResponse for ShiftError {
    fn into_response(self) -> Response {
        match self {
            ShiftError::AlreadyActive
            | ShiftError::NoActiveShift
            | ShiftError::BreakAlreadyActive
            | ShiftError::NoBreakToEnd => reject(StatusCode::CONFLICT, self.to_string()),
            ShiftError::Upload(_) => reject(StatusCode::BAD_GATEWAY, "media upload failed"),
            ShiftError::Storage(detail) => {
                tracing::error!(error = %detail, "shift operation failed");
                reject(StatusCode::INTERNAL_SERVER_ERROR, "internal error")
            }
        }
    }
}

impl From<SessionStoreError> for ShiftError {
    fn from(err: SessionStoreError) -> Self {
        match err {
            // A concurrent duplicate start surfaces from the store as a
            // conflict; report it the same way as the read-path check.
            SessionStoreError::OpenShiftExists => ShiftError::AlreadyActive,
            SessionStoreError::OpenBreakExists => ShiftError::BreakAlreadyActive,
            SessionStoreError::NoOpenBreak => ShiftError::NoBreakToEnd,
            SessionStoreError::NotFound => ShiftError::NoActiveShift,
            SessionStoreError::Backend(detail) => ShiftError::Storage(detail),
        }
    }
}
