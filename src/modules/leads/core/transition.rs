use crate::modules::leads::adapters::outbound::leads::AuditLedger;
use crate::modules::leads::core::audit::AuditEntry;
use crate::shared::infrastructure::clock::Clock;
use std::sync::Arc;
use uuid::Uuid;

/// The single chokepoint for the audit invariant: every observed lead-status
/// change flows through `record`, which appends exactly one ledger entry.
/// Callers resolve ids to names before calling and only call when the status
/// actually changed (direct edits) or unconditionally on meeting close.
pub struct TransitionRecorder {
    ledger: Arc<dyn AuditLedger>,
    clock: Arc<dyn Clock>,
}

impl TransitionRecorder {
    pub fn new(ledger: Arc<dyn AuditLedger>, clock: Arc<dyn Clock>) -> Self {
        Self { ledger, clock }
    }

    pub async fn record(
        &self,
        lead_id: &str,
        acting_user_id: &str,
        status_before: &str,
        status_after: &str,
        action: &str,
        note: Option<String>,
    ) -> anyhow::Result<()> {
        self.ledger
            .append(AuditEntry {
                id: Uuid::now_v7(),
                lead_id: lead_id.to_string(),
                acting_user_id: acting_user_id.to_string(),
                status_before: status_before.to_string(),
                status_after: status_after.to_string(),
                action: action.to_string(),
                note,
                recorded_at: self.clock.now(),
            })
            .await
    }
}
