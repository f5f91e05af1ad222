use super::{AuditLedger, LeadStore, StatusCatalog};
use crate::modules::leads::core::audit::AuditEntry;
use crate::modules::leads::core::lead::{Lead, LeadStatus};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::Mutex;

#[derive(Default)]
pub struct InMemoryLeads {
    leads: Mutex<HashMap<String, Lead>>,
}

impl InMemoryLeads {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LeadStore for InMemoryLeads {
    async fn get(&self, lead_id: &str) -> anyhow::Result<Option<Lead>> {
        Ok(self.leads.lock().await.get(lead_id).cloned())
    }

    async fn insert(&self, lead: Lead) -> anyhow::Result<()> {
        self.leads.lock().await.insert(lead.id.clone(), lead);
        Ok(())
    }

    async fn update(&self, lead: Lead) -> anyhow::Result<()> {
        let mut leads = self.leads.lock().await;
        if !leads.contains_key(&lead.id) {
            anyhow::bail!("lead {} not found", lead.id);
        }
        leads.insert(lead.id.clone(), lead);
        Ok(())
    }
}

pub struct InMemoryStatusCatalog {
    statuses: Vec<LeadStatus>,
}

impl InMemoryStatusCatalog {
    pub fn new(statuses: Vec<LeadStatus>) -> Self {
        Self { statuses }
    }

    /// Default reference seed. Only "Sold" is terminal here; deployments with
    /// more terminal outcomes flag their own rows.
    pub fn with_default_seed() -> Self {
        let status = |id: i64, name: &str, is_terminal: bool| LeadStatus {
            id,
            name: name.to_string(),
            is_terminal,
        };
        Self::new(vec![
            status(1, "Interested", false),
            status(2, "Follow Up", false),
            status(3, "Call Back", false),
            status(4, "Not Interested", false),
            status(5, "Sold", true),
        ])
    }
}

#[async_trait]
impl StatusCatalog for InMemoryStatusCatalog {
    async fn resolve_name(&self, status_id: i64) -> anyhow::Result<Option<String>> {
        Ok(self
            .statuses
            .iter()
            .find(|s| s.id == status_id)
            .map(|s| s.name.clone()))
    }

    async fn is_terminal(&self, status_id: i64) -> anyhow::Result<bool> {
        Ok(self
            .statuses
            .iter()
            .find(|s| s.id == status_id)
            .is_some_and(|s| s.is_terminal))
    }
}

#[derive(Default)]
pub struct InMemoryAuditLedger {
    entries: Mutex<Vec<AuditEntry>>,
}

impl InMemoryAuditLedger {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AuditLedger for InMemoryAuditLedger {
    async fn append(&self, entry: AuditEntry) -> anyhow::Result<()> {
        self.entries.lock().await.push(entry);
        Ok(())
    }

    async fn list_by_lead(&self, lead_id: &str) -> anyhow::Result<Vec<AuditEntry>> {
        // Stable sort over the reversed log: same-instant entries keep
        // newest-append-first order.
        let mut rows: Vec<AuditEntry> = self
            .entries
            .lock()
            .await
            .iter()
            .rev()
            .filter(|e| e.lead_id == lead_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.recorded_at.cmp(&a.recorded_at));
        Ok(rows)
    }
}
