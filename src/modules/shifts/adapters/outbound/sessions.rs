use crate::modules::shifts::core::session::{BreakRecord, ShiftSession};
use crate::shared::core::primitives::GeoPoint;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum SessionStoreError {
    #[error("an open shift already exists for this user and date")]
    OpenShiftExists,

    #[error("an open break already exists for this shift")]
    OpenBreakExists,

    #[error("no open break for this shift")]
    NoOpenBreak,

    #[error("shift session not found")]
    NotFound,

    #[error("backend error: {0}")]
    Backend(String),
}

/// Shift session store port.
///
/// `create_open` and `open_break` are the invariant chokepoints: each adapter
/// must perform its existence check and the insert atomically, so that two
/// concurrent starts can never both succeed.
#[async_trait]
pub trait ShiftSessionStore: Send + Sync {
    async fn create_open(&self, session: ShiftSession) -> Result<(), SessionStoreError>;

    async fn find_open(
        &self,
        user_id: &str,
        date: NaiveDate,
    ) -> Result<Option<ShiftSession>, SessionStoreError>;

    /// Latest session for the day, open or closed.
    async fn find_latest(
        &self,
        user_id: &str,
        date: NaiveDate,
    ) -> Result<Option<ShiftSession>, SessionStoreError>;

    async fn close(
        &self,
        session_id: Uuid,
        ended_at: DateTime<Utc>,
        end_location: Option<GeoPoint>,
        end_selfie_key: String,
    ) -> Result<ShiftSession, SessionStoreError>;

    async fn open_break(&self, record: BreakRecord) -> Result<(), SessionStoreError>;

    /// Closes the open break, persists its fractional duration and adds it to
    /// the session's running total in the same write.
    async fn close_break(
        &self,
        session_id: Uuid,
        ended_at: DateTime<Utc>,
    ) -> Result<BreakRecord, SessionStoreError>;

    async fn latest_break(
        &self,
        session_id: Uuid,
    ) -> Result<Option<BreakRecord>, SessionStoreError>;
}

pub mod in_memory;
