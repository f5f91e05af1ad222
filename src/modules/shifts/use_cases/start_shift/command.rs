use crate::shared::core::primitives::GeoPoint;
use crate::shared::infrastructure::media_gateway::MediaFile;

/// The selfie is a required precondition: a shift cannot start without its
/// evidence photo.
#[derive(Debug, Clone)]
pub struct StartShift {
    pub user_id: String,
    pub selfie: MediaFile,
    pub location: Option<GeoPoint>,
    pub notes: Option<String>,
}
