use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Action tags recorded with each transition.
pub const ACTION_MEET: &str = "Meet";
pub const ACTION_UPDATE: &str = "Update";

/// Sentinel written when a status id cannot be resolved to a name. Resolution
/// failure never aborts an otherwise-valid operation.
pub const UNKNOWN_STATUS: &str = "Unknown";

/// One row of the lead history ledger. Rows carry human-readable status names,
/// not ids, so later renames or deletes of reference data cannot corrupt
/// history. Append-only: never updated, never deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    pub id: Uuid,
    pub lead_id: String,
    pub acting_user_id: String,
    pub status_before: String,
    pub status_after: String,
    pub action: String,
    pub note: Option<String>,
    pub recorded_at: DateTime<Utc>,
}
