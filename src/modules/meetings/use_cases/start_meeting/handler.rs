use crate::modules::leads::adapters::outbound::leads::LeadStore;
use crate::modules::meetings::adapters::outbound::meetings::MeetingStore;
use crate::modules::meetings::core::meeting::{MediaAttachment, MediaKind, Meeting};
use crate::modules::meetings::use_cases::error::MeetingError;
use crate::modules::meetings::use_cases::start_meeting::command::StartMeeting;
use crate::shared::infrastructure::clock::Clock;
use crate::shared::infrastructure::media_gateway::{
    MediaGateway, UploadOptions, upload_with_timeout,
};
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct StartedMeeting {
    pub meeting: Meeting,
    pub selfie_url: String,
}

pub struct StartMeetingHandler {
    meetings: Arc<dyn MeetingStore>,
    leads: Arc<dyn LeadStore>,
    media: Arc<dyn MediaGateway>,
    clock: Arc<dyn Clock>,
    upload_timeout: Duration,
    signed_ttl_minutes: u32,
}

impl StartMeetingHandler {
    pub fn new(
        meetings: Arc<dyn MeetingStore>,
        leads: Arc<dyn LeadStore>,
        media: Arc<dyn MediaGateway>,
        clock: Arc<dyn Clock>,
        upload_timeout: Duration,
        signed_ttl_minutes: u32,
    ) -> Self {
        Self {
            meetings,
            leads,
            media,
            clock,
            upload_timeout,
            signed_ttl_minutes,
        }
    }

    pub async fn handle(&self, command: StartMeeting) -> Result<StartedMeeting, MeetingError> {
        self.leads
            .get(&command.lead_id)
            .await?
            .ok_or(MeetingError::LeadNotFound)?;

        if self.meetings.find_open(&command.lead_id).await?.is_some() {
            return Err(MeetingError::MeetingAlreadyActive);
        }

        // The start selfie lives under the shopphotos directory on the storage
        // side; the attachment row still tags it as a selfie.
        let stored = upload_with_timeout(
            self.media.as_ref(),
            self.upload_timeout,
            "shopphotos",
            "meeting_start",
            &command.acting_user_id,
            command.selfie,
            UploadOptions::private_evidence(self.signed_ttl_minutes),
        )
        .await?;

        let meeting = Meeting {
            id: Uuid::now_v7(),
            lead_id: command.lead_id,
            meeting_start_time: self.clock.now(),
            meeting_end_time: None,
            start_location: command.location,
            end_location: None,
            end_note: None,
        };
        self.meetings.create_open(meeting.clone()).await?;
        self.meetings
            .append_media(MediaAttachment {
                id: Uuid::now_v7(),
                meeting_id: meeting.id,
                kind: MediaKind::Selfie,
                object_key: stored.key,
            })
            .await?;

        Ok(StartedMeeting {
            meeting,
            selfie_url: stored.url,
        })
    }
}
