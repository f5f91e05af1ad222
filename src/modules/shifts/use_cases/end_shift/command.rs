use crate::shared::core::primitives::GeoPoint;
use crate::shared::infrastructure::media_gateway::MediaFile;

#[derive(Debug, Clone)]
pub struct EndShift {
    pub user_id: String,
    pub selfie: MediaFile,
    pub location: Option<GeoPoint>,
}
