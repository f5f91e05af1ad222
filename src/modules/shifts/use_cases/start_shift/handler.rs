use crate::modules::shifts::adapters::outbound::sessions::ShiftSessionStore;
use crate::modules::shifts::core::session::ShiftSession;
use crate::modules::shifts::use_cases::error::ShiftError;
use crate::modules::shifts::use_cases::start_shift::command::StartShift;
use crate::shared::infrastructure::clock::Clock;
use crate::shared::infrastructure::media_gateway::{
    MediaGateway, UploadOptions, upload_with_timeout,
};
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct StartedShift {
    pub session: ShiftSession,
    pub selfie_url: String,
}

pub struct StartShiftHandler {
    sessions: Arc<dyn ShiftSessionStore>,
    media: Arc<dyn MediaGateway>,
    clock: Arc<dyn Clock>,
    upload_timeout: Duration,
    signed_ttl_minutes: u32,
}

impl StartShiftHandler {
    pub fn new(
        sessions: Arc<dyn ShiftSessionStore>,
        media: Arc<dyn MediaGateway>,
        clock: Arc<dyn Clock>,
        upload_timeout: Duration,
        signed_ttl_minutes: u32,
    ) -> Self {
        Self {
            sessions,
            media,
            clock,
            upload_timeout,
            signed_ttl_minutes,
        }
    }

    /// Check, upload, create — in that order. The upload is fatal: nothing is
    /// written when it fails. The store repeats the uniqueness check
    /// atomically, so a concurrent duplicate start still loses.
    pub async fn handle(&self, command: StartShift) -> Result<StartedShift, ShiftError> {
        let now = self.clock.now();
        let today = now.date_naive();

        if self
            .sessions
            .find_open(&command.user_id, today)
            .await?
            .is_some()
        {
            return Err(ShiftError::AlreadyActive);
        }

        let stored = upload_with_timeout(
            self.media.as_ref(),
            self.upload_timeout,
            "selfies",
            "shift_start",
            &command.user_id,
            command.selfie,
            UploadOptions::private_evidence(self.signed_ttl_minutes),
        )
        .await?;

        let session = ShiftSession {
            id: Uuid::now_v7(),
            user_id: command.user_id,
            shift_date: today,
            shift_start: now,
            shift_end: None,
            start_location: command.location,
            end_location: None,
            start_selfie_key: stored.key,
            end_selfie_key: None,
            break_minutes: 0.0,
            notes: command.notes,
        };
        self.sessions.create_open(session.clone()).await?;

        Ok(StartedShift {
            session,
            selfie_url: stored.url,
        })
    }
}

#[cfg(test)]
mod start_shift_handler_tests {
    use super::*;
    use crate::modules::shifts::adapters::outbound::sessions::in_memory::InMemoryShiftSessions;
    use crate::shared::infrastructure::clock::manual::ManualClock;
    use crate::shared::infrastructure::media_gateway::MediaGatewayError;
    use crate::shared::infrastructure::media_gateway::in_memory::InMemoryMediaGateway;
    use crate::tests::fixtures::make_selfie;
    use chrono::{TimeZone, Utc};
    use rstest::{fixture, rstest};

    type BeforeEachReturn = (
        Arc<InMemoryShiftSessions>,
        Arc<InMemoryMediaGateway>,
        Arc<ManualClock>,
        StartShiftHandler,
    );

    #[fixture]
    fn before_each() -> BeforeEachReturn {
        let sessions = Arc::new(InMemoryShiftSessions::new());
        let media = Arc::new(InMemoryMediaGateway::new());
        let clock = Arc::new(ManualClock::starting_at(
            Utc.with_ymd_and_hms(2026, 3, 2, 9, 0, 0).unwrap(),
        ));
        let handler = StartShiftHandler::new(
            sessions.clone(),
            media.clone(),
            clock.clone(),
            Duration::from_secs(5),
            15,
        );
        (sessions, media, clock, handler)
    }

    fn make_command() -> StartShift {
        StartShift {
            user_id: "user-0001".into(),
            selfie: make_selfie(),
            location: None,
            notes: None,
        }
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_open_a_session_and_return_the_signed_selfie_url(
        before_each: BeforeEachReturn,
    ) {
        let (sessions, _media, clock, handler) = before_each;
        let started = handler.handle(make_command()).await.expect("handle failed");
        assert_eq!(started.session.shift_start, clock.now());
        assert!(started.session.is_open());
        assert!(started.selfie_url.contains("signed=1"));
        let open = sessions
            .find_open("user-0001", clock.now().date_naive())
            .await
            .unwrap();
        assert!(open.is_some());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_when_a_shift_is_already_active(before_each: BeforeEachReturn) {
        let (_sessions, _media, _clock, handler) = before_each;
        handler.handle(make_command()).await.expect("first start failed");
        let result = handler.handle(make_command()).await;
        assert!(matches!(result, Err(ShiftError::AlreadyActive)));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_not_create_a_session_when_the_upload_fails(
        before_each: BeforeEachReturn,
    ) {
        let (sessions, media, clock, handler) = before_each;
        media.toggle_offline().await;
        let result = handler.handle(make_command()).await;
        assert!(matches!(result, Err(ShiftError::Upload(_))));
        let open = sessions
            .find_open("user-0001", clock.now().date_naive())
            .await
            .unwrap();
        assert!(open.is_none());
    }

    #[rstest]
    #[tokio::test(start_paused = true)]
    async fn it_should_not_create_a_session_when_the_upload_times_out(
        before_each: BeforeEachReturn,
    ) {
        let (sessions, media, clock, handler) = before_each;
        media.stall_directory("selfies").await;
        let result = handler.handle(make_command()).await;
        assert!(matches!(
            result,
            Err(ShiftError::Upload(MediaGatewayError::Timeout(_)))
        ));
        let open = sessions
            .find_open("user-0001", clock.now().date_naive())
            .await
            .unwrap();
        assert!(open.is_none());
    }
}
