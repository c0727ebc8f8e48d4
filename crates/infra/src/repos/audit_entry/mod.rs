mod inmemory;
mod postgres;

pub use inmemory::InMemoryAuditEntryRepo;
pub use postgres::PostgresAuditEntryRepo;
use renewal_reminder_domain::{AuditEntry, ID};

#[async_trait::async_trait]
pub trait IAuditEntryRepo: Send + Sync {
    async fn insert(&self, entry: &AuditEntry) -> anyhow::Result<()>;
    /// Entries for a record, oldest first
    async fn find_by_record(&self, record_id: &ID) -> anyhow::Result<Vec<AuditEntry>>;
    async fn delete_by_record(&self, record_id: &ID) -> anyhow::Result<()>;
}

#[cfg(test)]
mod tests {
    use crate::Context;
    use renewal_reminder_domain::{AuditEntry, ID};

    #[tokio::test]
    async fn appends_in_order() {
        let ctx = Context::create_inmemory();
        let record_id = ID::default();
        let other_record_id = ID::default();

        for (i, body) in ["first", "second", "third"].iter().enumerate() {
            let entry = AuditEntry::new(&record_id, body.to_string(), i as i64);
            ctx.repos.audit_entries.insert(&entry).await.unwrap();
        }
        let noise = AuditEntry::new(&other_record_id, "other".into(), 0);
        ctx.repos.audit_entries.insert(&noise).await.unwrap();

        let entries = ctx
            .repos
            .audit_entries
            .find_by_record(&record_id)
            .await
            .unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(
            entries.iter().map(|e| e.body.as_str()).collect::<Vec<_>>(),
            vec!["first", "second", "third"]
        );
    }

    #[tokio::test]
    async fn delete_by_record_leaves_other_records_alone() {
        let ctx = Context::create_inmemory();
        let record_id = ID::default();
        let other_record_id = ID::default();

        let entry = AuditEntry::new(&record_id, "gone".into(), 0);
        let kept = AuditEntry::new(&other_record_id, "kept".into(), 0);
        ctx.repos.audit_entries.insert(&entry).await.unwrap();
        ctx.repos.audit_entries.insert(&kept).await.unwrap();

        ctx.repos
            .audit_entries
            .delete_by_record(&record_id)
            .await
            .unwrap();

        assert!(ctx
            .repos
            .audit_entries
            .find_by_record(&record_id)
            .await
            .unwrap()
            .is_empty());
        assert_eq!(
            ctx.repos
                .audit_entries
                .find_by_record(&other_record_id)
                .await
                .unwrap()
                .len(),
            1
        );
    }
}
