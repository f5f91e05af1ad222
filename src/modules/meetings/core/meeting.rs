use crate::shared::core::primitives::GeoPoint;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One field visit to a lead. `meeting_end_time = None` means in progress; at
/// most one open meeting may exist per lead. Ending a meeting is terminal —
/// a later visit is a brand-new row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meeting {
    pub id: Uuid,
    pub lead_id: String,
    pub meeting_start_time: DateTime<Utc>,
    pub meeting_end_time: Option<DateTime<Utc>>,
    pub start_location: GeoPoint,
    pub end_location: Option<GeoPoint>,
    pub end_note: Option<String>,
}

impl Meeting {
    pub fn is_open(&self) -> bool {
        self.meeting_end_time.is_none()
    }
}

/// Media evidence rows are normalized to one tagged collection per meeting
/// instead of three parallel ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    Selfie,
    ShopPhoto,
    Recording,
}

/// Appended, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaAttachment {
    pub id: Uuid,
    pub meeting_id: Uuid,
    pub kind: MediaKind,
    pub object_key: String,
}
