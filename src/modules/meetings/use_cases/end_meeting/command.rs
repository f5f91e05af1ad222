use crate::shared::core::primitives::GeoPoint;
use crate::shared::infrastructure::media_gateway::MediaFile;
use chrono::NaiveDate;

#[derive(Debug, Clone)]
pub struct EndMeeting {
    pub lead_id: String,
    pub acting_user_id: String,
    pub selfie: MediaFile,
    pub location: GeoPoint,
    pub new_status: i64,
    pub plan_interest: Option<String>,
    /// Best-effort evidence: a failed upload is logged and never blocks the
    /// close.
    pub recording: Option<MediaFile>,
    pub notes: Option<String>,
    pub next_follow_up_date: Option<NaiveDate>,
}
