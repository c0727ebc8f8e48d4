use super::IAuditEntryRepo;
use crate::repos::shared::inmemory_repo::*;
use renewal_reminder_domain::{AuditEntry, ID};

pub struct InMemoryAuditEntryRepo {
    audit_entries: std::sync::Mutex<Vec<AuditEntry>>,
}

impl InMemoryAuditEntryRepo {
    pub fn new() -> Self {
        Self {
            audit_entries: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IAuditEntryRepo for InMemoryAuditEntryRepo {
    async fn insert(&self, entry: &AuditEntry) -> anyhow::Result<()> {
        insert(entry, &self.audit_entries);
        Ok(())
    }

    async fn find_by_record(&self, record_id: &ID) -> anyhow::Result<Vec<AuditEntry>> {
        let mut entries = find_by(&self.audit_entries, |e: &AuditEntry| {
            e.reminder_record_id == *record_id
        });
        entries.sort_by_key(|e| e.created_at);
        Ok(entries)
    }

    async fn delete_by_record(&self, record_id: &ID) -> anyhow::Result<()> {
        find_and_delete_by(&self.audit_entries, |e: &AuditEntry| {
            e.reminder_record_id == *record_id
        });
        Ok(())
    }
}
