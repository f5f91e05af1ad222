use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A sales prospect. The engine consumes leads; it does not own their CRUD.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lead {
    pub id: String,
    pub name: String,
    /// Reference to a `LeadStatus` row.
    pub lead_status: i64,
    /// Stamped once the lead reaches a terminal status.
    pub completed_at: Option<DateTime<Utc>>,
    pub plan_interest: Option<String>,
    pub next_follow_up_date: Option<NaiveDate>,
    pub meeting_notes: Option<String>,
}

/// Reference row for a lead status. Terminality is data on the row itself,
/// never a name comparison against seed strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeadStatus {
    pub id: i64,
    pub name: String,
    pub is_terminal: bool,
}
