use crate::modules::leads::adapters::outbound::leads::AuditLedger;
use crate::modules::leads::core::audit::AuditEntry;
use std::sync::Arc;

/// Read-only view over the ledger, newest first.
pub struct LeadHistoryHandler {
    ledger: Arc<dyn AuditLedger>,
}

impl LeadHistoryHandler {
    pub fn new(ledger: Arc<dyn AuditLedger>) -> Self {
        Self { ledger }
    }

    pub async fn handle(&self, lead_id: &str) -> anyhow::Result<Vec<AuditEntry>> {
        self.ledger.list_by_lead(lead_id).await
    }
}
