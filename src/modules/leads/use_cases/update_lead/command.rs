use chrono::NaiveDate;

/// Partial edit of a lead. Absent fields are left unchanged; a present
/// `lead_status` that differs from the stored value triggers the transition
/// coordinator.
#[derive(Debug, Clone)]
pub struct UpdateLead {
    pub lead_id: String,
    pub acting_user_id: String,
    pub lead_status: Option<i64>,
    pub plan_interest: Option<String>,
    pub next_follow_up_date: Option<NaiveDate>,
    pub meeting_notes: Option<String>,
    pub note: Option<String>,
}
