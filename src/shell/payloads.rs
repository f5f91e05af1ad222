use crate::shared::infrastructure::media_gateway::MediaFile;
use axum::{Json, http::StatusCode, response::IntoResponse, response::Response};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

/// File evidence travels inside JSON bodies as base64.
#[derive(Debug, Clone, Deserialize)]
pub struct FilePayload {
    pub file_name: String,
    #[serde(default)]
    pub content_type: Option<String>,
    pub content_base64: String,
}

impl FilePayload {
    pub fn into_media_file(self) -> Result<MediaFile, base64::DecodeError> {
        let bytes = STANDARD.decode(self.content_base64.as_bytes())?;
        Ok(MediaFile {
            file_name: self.file_name,
            content_type: self.content_type,
            bytes,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

pub fn reject(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorBody {
            error: message.into(),
        }),
    )
        .into_response()
}

#[cfg(test)]
mod payloads_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_decode_a_base64_payload() {
        let payload = FilePayload {
            file_name: "selfie.jpg".into(),
            content_type: Some("image/jpeg".into()),
            content_base64: STANDARD.encode([0xFF, 0xD8, 0xFF]),
        };
        let file = payload.into_media_file().expect("decode failed");
        assert_eq!(file.bytes, vec![0xFF, 0xD8, 0xFF]);
    }

    #[rstest]
    fn it_should_fail_on_malformed_base64() {
        let payload = FilePayload {
            file_name: "selfie.jpg".into(),
            content_type: None,
            content_base64: "not base64!!".into(),
        };
        assert!(payload.into_media_file().is_err());
    }
}
