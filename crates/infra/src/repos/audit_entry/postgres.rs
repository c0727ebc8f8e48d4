use super::IAuditEntryRepo;
use renewal_reminder_domain::{AuditEntry, ID};
use sqlx::{types::Uuid, FromRow, PgPool};
use tracing::error;

pub struct PostgresAuditEntryRepo {
    pool: PgPool,
}

impl PostgresAuditEntryRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct AuditEntryRaw {
    audit_entry_uid: Uuid,
    reminder_record_uid: Uuid,
    body: String,
    created_at: i64,
}

impl From<AuditEntryRaw> for AuditEntry {
    fn from(e: AuditEntryRaw) -> Self {
        Self {
            id: e.audit_entry_uid.into(),
            reminder_record_id: e.reminder_record_uid.into(),
            body: e.body,
            created_at: e.created_at,
        }
    }
}

#[async_trait::async_trait]
impl IAuditEntryRepo for PostgresAuditEntryRepo {
    async fn insert(&self, entry: &AuditEntry) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO audit_entries(audit_entry_uid, reminder_record_uid, body, created_at)
            VALUES($1, $2, $3, $4)
            "#,
        )
        .bind(entry.id.inner_ref())
        .bind(entry.reminder_record_id.inner_ref())
        .bind(&entry.body)
        .bind(entry.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Unable to insert audit entry: {:?}. DB returned error: {:?}",
                entry, e
            );
            e
        })?;
        Ok(())
    }

    async fn find_by_record(&self, record_id: &ID) -> anyhow::Result<Vec<AuditEntry>> {
        let entries_raw: Vec<AuditEntryRaw> = sqlx::query_as(
            r#"
            SELECT * FROM audit_entries
            WHERE reminder_record_uid = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(record_id.inner_ref())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Find audit entries for record: {:?} failed. DB returned error: {:?}",
                record_id, e
            );
            e
        })?;
        Ok(entries_raw.into_iter().map(|e| e.into()).collect())
    }

    async fn delete_by_record(&self, record_id: &ID) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            DELETE FROM audit_entries
            WHERE reminder_record_uid = $1
            "#,
        )
        .bind(record_id.inner_ref())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Delete audit entries for record: {:?} failed. DB returned error: {:?}",
                record_id, e
            );
            e
        })?;
        Ok(())
    }
}
