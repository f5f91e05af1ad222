use crate::shared::core::primitives::GeoPoint;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One working session per user per calendar day. `shift_end = None` means the
/// session is still open; at most one open session may exist per (user, date).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftSession {
    pub id: Uuid,
    pub user_id: String,
    pub shift_date: NaiveDate,
    pub shift_start: DateTime<Utc>,
    pub shift_end: Option<DateTime<Utc>>,
    pub start_location: Option<GeoPoint>,
    pub end_location: Option<GeoPoint>,
    pub start_selfie_key: String,
    pub end_selfie_key: Option<String>,
    /// Running total across all closed breaks, fractional minutes.
    pub break_minutes: f64,
    pub notes: Option<String>,
}

impl ShiftSession {
    pub fn is_open(&self) -> bool {
        self.shift_end.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BreakKind {
    Lunch,
    Coffee,
    Personal,
    #[default]
    Other,
}

/// One break within a shift. Duration is derived and persisted only once both
/// timestamps are known.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreakRecord {
    pub id: Uuid,
    pub shift_id: Uuid,
    pub break_start: DateTime<Utc>,
    pub break_end: Option<DateTime<Utc>>,
    pub duration_minutes: Option<f64>,
    pub kind: BreakKind,
    pub notes: Option<String>,
}

impl BreakRecord {
    pub fn is_open(&self) -> bool {
        self.break_end.is_none()
    }
}
