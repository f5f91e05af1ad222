use super::{SessionStoreError, ShiftSessionStore};
use crate::modules::shifts::core::session::{BreakRecord, ShiftSession};
use crate::shared::core::primitives::{GeoPoint, minutes_between};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use tokio::sync::Mutex;
use uuid::Uuid;

#[derive(Default)]
struct State {
    sessions: Vec<ShiftSession>,
    breaks: Vec<BreakRecord>,
}

/// In-memory adapter. One mutex over both tables makes every check-and-create
/// atomic, which is what enforces the one-open-session and one-open-break
/// invariants under concurrent requests.
#[derive(Default)]
pub struct InMemoryShiftSessions {
    inner: Mutex<State>,
}

impl InMemoryShiftSessions {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ShiftSessionStore for InMemoryShiftSessions {
    async fn create_open(&self, session: ShiftSession) -> Result<(), SessionStoreError> {
        let mut state = self.inner.lock().await;
        let duplicate = state.sessions.iter().any(|s| {
            s.user_id == session.user_id && s.shift_date == session.shift_date && s.is_open()
        });
        if duplicate {
            return Err(SessionStoreError::OpenShiftExists);
        }
        state.sessions.push(session);
        Ok(())
    }

    async fn find_open(
        &self,
        user_id: &str,
        date: NaiveDate,
    ) -> Result<Option<ShiftSession>, SessionStoreError> {
        let state = self.inner.lock().await;
        Ok(state
            .sessions
            .iter()
            .find(|s| s.user_id == user_id && s.shift_date == date && s.is_open())
            .cloned())
    }

    async fn find_latest(
        &self,
        user_id: &str,
        date: NaiveDate,
    ) -> Result<Option<ShiftSession>, SessionStoreError> {
        let state = self.inner.lock().await;
        Ok(state
            .sessions
            .iter()
            .filter(|s| s.user_id == user_id && s.shift_date == date)
            .max_by_key(|s| s.shift_start)
            .cloned())
    }

    async fn close(
        &self,
        session_id: Uuid,
        ended_at: DateTime<Utc>,
        end_location: Option<GeoPoint>,
        end_selfie_key: String,
    ) -> Result<ShiftSession, SessionStoreError> {
        let mut state = self.inner.lock().await;
        let session = state
            .sessions
            .iter_mut()
            .find(|s| s.id == session_id)
            .ok_or(SessionStoreError::NotFound)?;
        session.shift_end = Some(ended_at);
        session.end_location = end_location;
        session.end_selfie_key = Some(end_selfie_key);
        Ok(session.clone())
    }

    async fn open_break(&self, record: BreakRecord) -> Result<(), SessionStoreError> {
        let mut state = self.inner.lock().await;
        if !state.sessions.iter().any(|s| s.id == record.shift_id) {
            return Err(SessionStoreError::NotFound);
        }
        if state
            .breaks
            .iter()
            .any(|b| b.shift_id == record.shift_id && b.is_open())
        {
            return Err(SessionStoreError::OpenBreakExists);
        }
        state.breaks.push(record);
        Ok(())
    }

    async fn close_break(
        &self,
        session_id: Uuid,
        ended_at: DateTime<Utc>,
    ) -> Result<BreakRecord, SessionStoreError> {
        let mut state = self.inner.lock().await;
        let record = state
            .breaks
            .iter_mut()
            .find(|b| b.shift_id == session_id && b.is_open())
            .ok_or(SessionStoreError::NoOpenBreak)?;
        let minutes = minutes_between(record.break_start, ended_at);
        record.break_end = Some(ended_at);
        record.duration_minutes = Some(minutes);
        let record = record.clone();
        if let Some(session) = state.sessions.iter_mut().find(|s| s.id == session_id) {
            session.break_minutes += minutes;
        }
        Ok(record)
    }

    async fn latest_break(
        &self,
        session_id: Uuid,
    ) -> Result<Option<BreakRecord>, SessionStoreError> {
        let state = self.inner.lock().await;
        Ok(state
            .breaks
            .iter()
            .filter(|b| b.shift_id == session_id)
            .max_by_key(|b| b.break_start)
            .cloned())
    }
}
