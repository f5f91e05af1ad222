use crate::modules::shifts::adapters::outbound::sessions::ShiftSessionStore;
use crate::modules::shifts::core::session::BreakRecord;
use crate::modules::shifts::use_cases::error::ShiftError;
use crate::modules::shifts::use_cases::start_break::command::StartBreak;
use crate::shared::infrastructure::clock::Clock;
use std::sync::Arc;
use uuid::Uuid;

pub struct StartBreakHandler {
    sessions: Arc<dyn ShiftSessionStore>,
    clock: Arc<dyn Clock>,
}

impl StartBreakHandler {
    pub fn new(sessions: Arc<dyn ShiftSessionStore>, clock: Arc<dyn Clock>) -> Self {
        Self { sessions, clock }
    }

    pub async fn handle(&self, command: StartBreak) -> Result<BreakRecord, ShiftError> {
        let now = self.clock.now();
        let session = self
            .sessions
            .find_open(&command.user_id, now.date_naive())
            .await?
            .ok_or(ShiftError::NoActiveShift)?;

        let record = BreakRecord {
            id: Uuid::now_v7(),
            shift_id: session.id,
            break_start: now,
            break_end: None,
            duration_minutes: None,
            kind: command.kind,
            notes: command.notes,
        };
        self.sessions.open_break(record.clone()).await?;
        Ok(record)
    }
}
