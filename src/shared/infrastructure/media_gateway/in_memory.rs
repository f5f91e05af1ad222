use super::{MediaFile, MediaGateway, MediaGatewayError, StoredMedia, UploadOptions, Visibility};
use async_trait::async_trait;
use chrono::Utc;
use std::time::Duration;
use tokio::sync::Mutex;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct RecordedUpload {
    pub directory: String,
    pub prefix: String,
    pub owner_user_id: String,
    pub file_name: String,
    pub key: String,
}

#[derive(Default)]
pub struct InMemoryMediaGateway {
    pub uploads: Mutex<Vec<RecordedUpload>>,
    offline: Mutex<bool>,
    failing_directory: Mutex<Option<String>>,
    stalling_directory: Mutex<Option<String>>,
}

impl InMemoryMediaGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn toggle_offline(&self) {
        let mut offline = self.offline.lock().await;
        *offline = !*offline;
    }

    /// Fail uploads for one logical directory only, e.g. "recordings".
    pub async fn fail_directory(&self, directory: &str) {
        *self.failing_directory.lock().await = Some(directory.to_string());
    }

    /// Hang uploads for one logical directory until well past any caller's
    /// timeout. Pair with a paused tokio clock.
    pub async fn stall_directory(&self, directory: &str) {
        *self.stalling_directory.lock().await = Some(directory.to_string());
    }

    pub async fn upload_count(&self) -> usize {
        self.uploads.lock().await.len()
    }
}

#[async_trait]
impl MediaGateway for InMemoryMediaGateway {
    async fn upload(
        &self,
        directory: &str,
        prefix: &str,
        owner_user_id: &str,
        file: MediaFile,
        options: UploadOptions,
    ) -> Result<StoredMedia, MediaGatewayError> {
        if *self.offline.lock().await {
            return Err(MediaGatewayError::Backend("media gateway offline".into()));
        }
        if self
            .stalling_directory
            .lock()
            .await
            .as_deref()
            .is_some_and(|stalling| stalling == directory)
        {
            tokio::time::sleep(Duration::from_secs(3600)).await;
        }
        if self
            .failing_directory
            .lock()
            .await
            .as_deref()
            .is_some_and(|failing| failing == directory)
        {
            return Err(MediaGatewayError::Backend(format!(
                "upload rejected for directory {directory}"
            )));
        }

        let mut path = format!("{}/{directory}", options.disk);
        if options.add_date_path {
            path.push_str(&format!("/{}", Utc::now().format("%Y-%m-%d")));
        }
        if options.append_user_path {
            path.push_str(&format!("/{owner_user_id}"));
        }
        let key = format!("{path}/{prefix}_{}_{}", Uuid::now_v7(), file.file_name);
        let url = match options.visibility {
            Visibility::Private => format!(
                "https://media.local/{key}?signed=1&ttl={}m",
                options.signed_ttl_minutes
            ),
            Visibility::Public => format!("https://media.local/{key}"),
        };

        self.uploads.lock().await.push(RecordedUpload {
            directory: directory.to_string(),
            prefix: prefix.to_string(),
            owner_user_id: owner_user_id.to_string(),
            file_name: file.file_name,
            key: key.clone(),
        });
        Ok(StoredMedia { key, url })
    }
}
