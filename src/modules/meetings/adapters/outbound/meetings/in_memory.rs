use super::{MeetingStore, MeetingStoreError};
use crate::modules::meetings::core::meeting::{MediaAttachment, Meeting};
use crate::shared::core::primitives::GeoPoint;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::Mutex;
use uuid::Uuid;

#[derive(Default)]
struct State {
    meetings: Vec<Meeting>,
    media: Vec<MediaAttachment>,
}

#[derive(Default)]
pub struct InMemoryMeetings {
    inner: Mutex<State>,
}

impl InMemoryMeetings {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MeetingStore for InMemoryMeetings {
    async fn create_open(&self, meeting: Meeting) -> Result<(), MeetingStoreError> {
        let mut state = self.inner.lock().await;
        if state
            .meetings
            .iter()
            .any(|m| m.lead_id == meeting.lead_id && m.is_open())
        {
            return Err(MeetingStoreError::OpenMeetingExists);
        }
        state.meetings.push(meeting);
        Ok(())
    }

    async fn find_open(&self, lead_id: &str) -> Result<Option<Meeting>, MeetingStoreError> {
        let state = self.inner.lock().await;
        Ok(state
            .meetings
            .iter()
            .find(|m| m.lead_id == lead_id && m.is_open())
            .cloned())
    }

    async fn close(
        &self,
        meeting_id: Uuid,
        ended_at: DateTime<Utc>,
        end_location: GeoPoint,
        end_note: Option<String>,
    ) -> Result<Meeting, MeetingStoreError> {
        let mut state = self.inner.lock().await;
        let meeting = state
            .meetings
            .iter_mut()
            .find(|m| m.id == meeting_id)
            .ok_or(MeetingStoreError::NotFound)?;
        meeting.meeting_end_time = Some(ended_at);
        meeting.end_location = Some(end_location);
        meeting.end_note = end_note;
        Ok(meeting.clone())
    }

    async fn append_media(&self, attachment: MediaAttachment) -> Result<(), MeetingStoreError> {
        let mut state = self.inner.lock().await;
        if !state.meetings.iter().any(|m| m.id == attachment.meeting_id) {
            return Err(MeetingStoreError::NotFound);
        }
        state.media.push(attachment);
        Ok(())
    }

    async fn media_for(
        &self,
        meeting_id: Uuid,
    ) -> Result<Vec<MediaAttachment>, MeetingStoreError> {
        let state = self.inner.lock().await;
        Ok(state
            .media
            .iter()
            .filter(|a| a.meeting_id == meeting_id)
            .cloned()
            .collect())
    }
}
