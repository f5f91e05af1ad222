use crate::shared::core::primitives::GeoPoint;
use crate::shared::infrastructure::media_gateway::MediaFile;

#[derive(Debug, Clone)]
pub struct StartMeeting {
    pub lead_id: String,
    pub acting_user_id: String,
    pub selfie: MediaFile,
    pub location: GeoPoint,
}
