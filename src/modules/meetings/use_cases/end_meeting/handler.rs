use crate::modules::leads::adapters::outbound::leads::{LeadStore, StatusCatalog};
use crate::modules::leads::core::audit::{ACTION_MEET, UNKNOWN_STATUS};
use crate::modules::leads::core::transition::TransitionRecorder;
use crate::modules::meetings::adapters::outbound::meetings::MeetingStore;
use crate::modules::meetings::core::meeting::{MediaAttachment, MediaKind, Meeting};
use crate::modules::meetings::use_cases::end_meeting::command::EndMeeting;
use crate::modules::meetings::use_cases::error::MeetingError;
use crate::shared::infrastructure::clock::Clock;
use crate::shared::infrastructure::media_gateway::{
    MediaFile, MediaGateway, UploadOptions, upload_with_timeout,
};
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct EndedMeeting {
    pub meeting: Meeting,
    pub selfie_url: String,
    pub recording_url: Option<String>,
}

pub struct EndMeetingHandler {
    meetings: Arc<dyn MeetingStore>,
    leads: Arc<dyn LeadStore>,
    statuses: Arc<dyn StatusCatalog>,
    recorder: Arc<TransitionRecorder>,
    media: Arc<dyn MediaGateway>,
    clock: Arc<dyn Clock>,
    upload_timeout: Duration,
    signed_ttl_minutes: u32,
}

impl EndMeetingHandler {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        meetings: Arc<dyn MeetingStore>,
        leads: Arc<dyn LeadStore>,
        statuses: Arc<dyn StatusCatalog>,
        recorder: Arc<TransitionRecorder>,
        media: Arc<dyn MediaGateway>,
        clock: Arc<dyn Clock>,
        upload_timeout: Duration,
        signed_ttl_minutes: u32,
    ) -> Self {
        Self {
            meetings,
            leads,
            statuses,
            recorder,
            media,
            clock,
            upload_timeout,
            signed_ttl_minutes,
        }
    }

    /// Fixed-order close pipeline: end selfie (fatal), close the meeting,
    /// best-effort recording, resolve the old status name before it is
    /// overwritten, mutate the lead, stamp completion on terminal statuses,
    /// then append exactly one audit entry.
    pub async fn handle(&self, command: EndMeeting) -> Result<EndedMeeting, MeetingError> {
        let meeting = self
            .meetings
            .find_open(&command.lead_id)
            .await?
            .ok_or(MeetingError::NoActiveMeeting)?;

        let selfie = upload_with_timeout(
            self.media.as_ref(),
            self.upload_timeout,
            "selfies",
            "meeting_end",
            &command.acting_user_id,
            command.selfie,
            UploadOptions::private_evidence(self.signed_ttl_minutes),
        )
        .await?;
        self.meetings
            .append_media(MediaAttachment {
                id: Uuid::now_v7(),
                meeting_id: meeting.id,
                kind: MediaKind::Selfie,
                object_key: selfie.key,
            })
            .await?;

        let now = self.clock.now();
        let meeting = self
            .meetings
            .close(meeting.id, now, command.location, command.notes.clone())
            .await?;

        let recording_url = match command.recording {
            Some(recording) => {
                self.upload_recording_best_effort(&command.lead_id, &command.acting_user_id, meeting.id, recording)
                    .await
            }
            None => None,
        };

        let mut lead = self
            .leads
            .get(&command.lead_id)
            .await?
            .ok_or(MeetingError::LeadNotFound)?;
        let status_before = self
            .statuses
            .resolve_name(lead.lead_status)
            .await
            .ok()
            .flatten()
            .unwrap_or_else(|| UNKNOWN_STATUS.to_string());
        let status_after = self
            .statuses
            .resolve_name(command.new_status)
            .await
            .ok()
            .flatten()
            .unwrap_or_else(|| UNKNOWN_STATUS.to_string());

        lead.lead_status = command.new_status;
        lead.plan_interest = command.plan_interest;
        lead.next_follow_up_date = command.next_follow_up_date;
        lead.meeting_notes = command.notes.clone();
        if self.statuses.is_terminal(command.new_status).await? {
            lead.completed_at = Some(now);
        }
        self.leads.update(lead).await?;

        self.recorder
            .record(
                &command.lead_id,
                &command.acting_user_id,
                &status_before,
                &status_after,
                ACTION_MEET,
                command.notes,
            )
            .await
            .map_err(|e| MeetingError::Storage(e.to_string()))?;

        Ok(EndedMeeting {
            meeting,
            selfie_url: selfie.url,
            recording_url,
        })
    }

    async fn upload_recording_best_effort(
        &self,
        lead_id: &str,
        acting_user_id: &str,
        meeting_id: Uuid,
        recording: MediaFile,
    ) -> Option<String> {
        let stored = match upload_with_timeout(
            self.media.as_ref(),
            self.upload_timeout,
            "recordings",
            "meeting_audio",
            acting_user_id,
            recording,
            UploadOptions::private_evidence(self.signed_ttl_minutes),
        )
        .await
        {
            Ok(stored) => stored,
            Err(err) => {
                tracing::warn!(lead_id, error = %err, "recording upload failed, continuing meeting close");
                return None;
            }
        };
        if let Err(err) = self
            .meetings
            .append_media(MediaAttachment {
                id: Uuid::now_v7(),
                meeting_id,
                kind: MediaKind::Recording,
                object_key: stored.key,
            })
            .await
        {
            tracing::warn!(lead_id, error = %err, "recording attachment write failed, continuing meeting close");
            return None;
        }
        Some(stored.url)
    }
}
