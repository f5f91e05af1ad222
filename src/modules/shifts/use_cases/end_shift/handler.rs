use crate::modules::shifts::adapters::outbound::sessions::ShiftSessionStore;
use crate::modules::shifts::core::session::ShiftSession;
use crate::modules::shifts::use_cases::end_shift::command::EndShift;
use crate::modules::shifts::use_cases::error::ShiftError;
use crate::shared::infrastructure::clock::Clock;
use crate::shared::infrastructure::media_gateway::{
    MediaGateway, UploadOptions, upload_with_timeout,
};
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct EndedShift {
    pub session: ShiftSession,
    pub selfie_url: String,
}

pub struct EndShiftHandler {
    sessions: Arc<dyn ShiftSessionStore>,
    media: Arc<dyn MediaGateway>,
    clock: Arc<dyn Clock>,
    upload_timeout: Duration,
    signed_ttl_minutes: u32,
}

impl EndShiftHandler {
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

    /// An open break does not block ending the shift; its minutes simply stay
    /// unaccounted. Accepted behavior, kept as-is.
    pub async fn handle(&self, command: EndShift) -> Result<EndedShift, ShiftError> {
        let now = self.clock.now();
        let session = self
            .sessions
            .find_open(&command.user_id, now.date_naive())
            .await?
            .ok_or(ShiftError::NoActiveShift)?;

        let stored = upload_with_timeout(
            self.media.as_ref(),
            self.upload_timeout,
            "selfies",
            "shift_end",
            &command.user_id,
            command.selfie,
            UploadOptions::private_evidence(self.signed_ttl_minutes),
        )
        .await?;

        let session = self
            .sessions
            .close(session.id, now, command.location, stored.key)
            .await?;

        Ok(EndedShift {
            session,
            selfie_url: stored.url,
        })
    }
}

#[cfg(test)]
mod end_shift_handler_tests {
    use super::*;
    use crate::modules::shifts::adapters::outbound::sessions::in_memory::InMemoryShiftSessions;
    use crate::shared::infrastructure::clock::manual::ManualClock;
    use crate::shared::infrastructure::media_gateway::in_memory::InMemoryMediaGateway;
    use crate::tests::fixtures::{make_open_session, make_selfie};
    use chrono::{TimeZone, Utc};
    use rstest::{fixture, rstest};

    type BeforeEachReturn = (
        Arc<InMemoryShiftSessions>,
        Arc<InMemoryMediaGateway>,
        Arc<ManualClock>,
        EndShiftHandler,
    );

    #[fixture]
    fn before_each() -> BeforeEachReturn {
        let sessions = Arc::new(InMemoryShiftSessions::new());
        let media = Arc::new(InMemoryMediaGateway::new());
        let clock = Arc::new(ManualClock::starting_at(
            Utc.with_ymd_and_hms(2026, 3, 2, 17, 0, 0).unwrap(),
        ));
        let handler = EndShiftHandler::new(
            sessions.clone(),
            media.clone(),
            clock.clone(),
            Duration::from_secs(5),
            15,
        );
        (sessions, media, clock, handler)
    }

    fn make_command() -> EndShift {
        EndShift {
            user_id: "user-0001".into(),
            selfie: make_selfie(),
            location: None,
        }
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_close_the_open_session(before_each: BeforeEachReturn) {
        let (sessions, _media, clock, handler) = before_each;
        sessions
            .create_open(make_open_session("user-0001", clock.now()))
            .await
            .unwrap();
        let ended = handler.handle(make_command()).await.expect("handle failed");
        assert_eq!(ended.session.shift_end, Some(clock.now()));
        assert!(ended.session.end_selfie_key.is_some());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_without_an_active_shift(before_each: BeforeEachReturn) {
        let (_sessions, _media, _clock, handler) = before_each;
        let result = handler.handle(make_command()).await;
        assert!(matches!(result, Err(ShiftError::NoActiveShift)));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_leave_the_session_open_when_the_upload_fails(
        before_each: BeforeEachReturn,
    ) {
        let (sessions, media, clock, handler) = before_each;
        sessions
            .create_open(make_open_session("user-0001", clock.now()))
            .await
            .unwrap();
        media.toggle_offline().await;
        let result = handler.handle(make_command()).await;
        assert!(matches!(result, Err(ShiftError::Upload(_))));
        let open = sessions
            .find_open("user-0001", clock.now().date_naive())
            .await
            .unwrap();
        assert!(open.is_some());
    }
}
