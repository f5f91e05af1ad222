use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MediaGatewayError {
    #[error("upload backend error: {0}")]
    Backend(String),

    #[error("upload timed out after {0:?}")]
    Timeout(Duration),
}

#[derive(Debug, Clone)]
pub struct MediaFile {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// Gateway answers with a short-lived signed URL.
    Private,
    Public,
}

/// Options bag of the upload contract: storage tier, visibility, path
/// namespacing and signed-URL lifetime.
#[derive(Debug, Clone)]
pub struct UploadOptions {
    pub disk: String,
    pub visibility: Visibility,
    pub add_date_path: bool,
    pub append_user_path: bool,
    pub signed_ttl_minutes: u32,
}

impl UploadOptions {
    /// The evidence default: private object, namespaced by date and user.
    pub fn private_evidence(signed_ttl_minutes: u32) -> Self {
        Self {
            disk: "media".to_string(),
            visibility: Visibility::Private,
            add_date_path: true,
            append_user_path: true,
            signed_ttl_minutes,
        }
    }
}

#[derive(Debug, Clone)]
pub struct StoredMedia {
    pub key: String,
    pub url: String,
}

/// Media Upload Gateway port. The engine stores files under a logical
/// directory and gets back `{key, url}`; it never sees the backend.
#[async_trait]
pub trait MediaGateway: Send + Sync {
    async fn upload(
        &self,
        directory: &str,
        prefix: &str,
        owner_user_id: &str,
        file: MediaFile,
        options: UploadOptions,
    ) -> Result<StoredMedia, MediaGatewayError>;
}

/// Wraps a gateway call in a request-scoped timeout. A timeout is reported as
/// an upload failure and falls under the caller's fatal or best-effort policy.
pub async fn upload_with_timeout(
    gateway: &dyn MediaGateway,
    timeout: Duration,
    directory: &str,
    prefix: &str,
    owner_user_id: &str,
    file: MediaFile,
    options: UploadOptions,
) -> Result<StoredMedia, MediaGatewayError> {
    match tokio::time::timeout(
        timeout,
        gateway.upload(directory, prefix, owner_user_id, file, options),
    )
    .await
    {
        Ok(result) => result,
        Err(_) => Err(MediaGatewayError::Timeout(timeout)),
    }
}

pub mod in_memory;
