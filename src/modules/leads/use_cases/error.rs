use crate::shell::payloads::reject;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LeadError {
    #[error("Lead not found")]
    NotFound,

    #[error("storage error: {0}")]
    Storage(String),
}

impl IntoResponse for LeadError {
    fn into_response(self) -> Response {
        match self {
            LeadError::NotFound => reject(StatusCode::NOT_FOUND, self.to_string()),
            LeadError::Storage(detail) => {
                tracing::error!(error = %detail, "lead operation failed");
                reject(StatusCode::INTERNAL_SERVER_ERROR, "internal error")
            }
        }
    }
}

impl From<anyhow::Error> for LeadError {
    fn from(err: anyhow::Error) -> Self {
        LeadError::Storage(err.to_string())
    }
}
