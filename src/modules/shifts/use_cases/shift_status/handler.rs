use crate::modules::shifts::adapters::outbound::sessions::ShiftSessionStore;
use crate::modules::shifts::core::status::{self, ShiftStatus};
use crate::modules::shifts::use_cases::error::ShiftError;
use crate::shared::infrastructure::clock::Clock;
use std::sync::Arc;

pub struct ShiftStatusHandler {
    sessions: Arc<dyn ShiftSessionStore>,
    clock: Arc<dyn Clock>,
}

impl ShiftStatusHandler {
    pub fn new(sessions: Arc<dyn ShiftSessionStore>, clock: Arc<dyn Clock>) -> Self {
        Self { sessions, clock }
    }

    pub async fn handle(&self, user_id: &str) -> Result<ShiftStatus, ShiftError> {
        let now = self.clock.now();
        let session = self.sessions.find_latest(user_id, now.date_naive()).await?;
        let latest_break = match &session {
            Some(session) => self.sessions.latest_break(session.id).await?,
            None => None,
        };
        Ok(status::derive(
            session.as_ref(),
            latest_break.as_ref(),
            now,
        ))
    }
}
