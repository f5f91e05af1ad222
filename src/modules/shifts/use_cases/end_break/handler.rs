use crate::modules::shifts::adapters::outbound::sessions::ShiftSessionStore;
use crate::modules::shifts::core::session::BreakRecord;
use crate::modules::shifts::use_cases::error::ShiftError;
use crate::shared::infrastructure::clock::Clock;
use std::sync::Arc;

pub struct EndBreakHandler {
    sessions: Arc<dyn ShiftSessionStore>,
    clock: Arc<dyn Clock>,
}

impl EndBreakHandler {
    pub fn new(sessions: Arc<dyn ShiftSessionStore>, clock: Arc<dyn Clock>) -> Self {
        Self { sessions, clock }
    }

    /// No open shift means no open break, so both cases report NoBreakToEnd.
    pub async fn handle(&self, user_id: &str) -> Result<BreakRecord, ShiftError> {
        let now = self.clock.now();
        let session = self
            .sessions
            .find_open(user_id, now.date_naive())
            .await?
            .ok_or(ShiftError::NoBreakToEnd)?;
        let record = self.sessions.close_break(session.id, now).await?;
        Ok(record)
    }
}
