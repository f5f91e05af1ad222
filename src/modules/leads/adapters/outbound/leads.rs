use crate::modules::leads::core::audit::AuditEntry;
use crate::modules::leads::core::lead::Lead;
use async_trait::async_trait;

#[async_trait]
pub trait LeadStore: Send + Sync {
    async fn get(&self, lead_id: &str) -> anyhow::Result<Option<Lead>>;
    async fn insert(&self, lead: Lead) -> anyhow::Result<()>;
    async fn update(&self, lead: Lead) -> anyhow::Result<()>;
}

#[async_trait]
pub trait StatusCatalog: Send + Sync {
    async fn resolve_name(&self, status_id: i64) -> anyhow::Result<Option<String>>;
    async fn is_terminal(&self, status_id: i64) -> anyhow::Result<bool>;
}

/// Append-only lead history sink.
#[async_trait]
pub trait AuditLedger: Send + Sync {
    async fn append(&self, entry: AuditEntry) -> anyhow::Result<()>;
    /// Newest first.
    async fn list_by_lead(&self, lead_id: &str) -> anyhow::Result<Vec<AuditEntry>>;
}

pub mod in_memory;
