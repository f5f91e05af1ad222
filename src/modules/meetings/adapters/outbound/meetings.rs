use crate::modules::meetings::core::meeting::{MediaAttachment, Meeting};
use crate::shared::core::primitives::GeoPoint;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum MeetingStoreError {
    #[error("an open meeting already exists for this lead")]
    OpenMeetingExists,

    #[error("meeting not found")]
    NotFound,

    #[error("backend error: {0}")]
    Backend(String),
}

/// Meeting store port. `create_open` checks and inserts atomically so only one
/// open meeting can ever exist per lead.
#[async_trait]
pub trait MeetingStore: Send + Sync {
    async fn create_open(&self, meeting: Meeting) -> Result<(), MeetingStoreError>;

    async fn find_open(&self, lead_id: &str) -> Result<Option<Meeting>, MeetingStoreError>;

    async fn close(
        &self,
        meeting_id: Uuid,
        ended_at: DateTime<Utc>,
        end_location: GeoPoint,
        end_note: Option<String>,
    ) -> Result<Meeting, MeetingStoreError>;

    async fn append_media(&self, attachment: MediaAttachment) -> Result<(), MeetingStoreError>;

    async fn media_for(&self, meeting_id: Uuid) -> Result<Vec<MediaAttachment>, MeetingStoreError>;
}

pub mod in_memory;
