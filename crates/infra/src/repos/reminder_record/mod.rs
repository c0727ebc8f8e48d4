mod inmemory;
mod postgres;

pub use inmemory::InMemoryReminderRecordRepo;
pub use postgres::PostgresReminderRecordRepo;
use renewal_reminder_domain::{ReminderRecord, ID};

#[async_trait::async_trait]
pub trait IReminderRecordRepo: Send + Sync {
    /// Fails when a record with the same (partner_number, product_name)
    /// already exists.
    async fn insert(&self, record: &ReminderRecord) -> anyhow::Result<()>;
    async fn save(&self, record: &ReminderRecord) -> anyhow::Result<()>;
    async fn find(&self, record_id: &ID) -> Option<ReminderRecord>;
    async fn find_all(&self) -> anyhow::Result<Vec<ReminderRecord>>;
    /// The records the daily sweep evaluates: state draft or confirmed
    async fn find_active(&self) -> anyhow::Result<Vec<ReminderRecord>>;
    async fn find_by_partner_and_product(
        &self,
        partner_number: &str,
        product_name: &str,
    ) -> Option<ReminderRecord>;
    async fn delete(&self, record_id: &ID) -> Option<ReminderRecord>;
}

#[cfg(test)]
mod tests {
    use crate::Context;
    use chrono::NaiveDate;
    use renewal_reminder_domain::{Entity, RecordState, ReminderRecord};
    use rust_decimal::Decimal;

    fn record(partner_number: &str, product_name: &str) -> ReminderRecord {
        ReminderRecord::new(
            partner_number.into(),
            product_name.into(),
            Decimal::new(10000, 2),
            NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            &Default::default(),
        )
    }

    #[tokio::test]
    async fn crud() {
        let ctx = Context::create_inmemory();
        let mut reminder = record("P-1", "Office Suite");

        assert!(ctx.repos.reminder_records.insert(&reminder).await.is_ok());

        let res = ctx
            .repos
            .reminder_records
            .find(&reminder.id)
            .await
            .unwrap();
        assert!(res.eq(&reminder));

        reminder.quantity = 4.0;
        reminder.confirm();
        assert!(ctx.repos.reminder_records.save(&reminder).await.is_ok());
        let res = ctx
            .repos
            .reminder_records
            .find(&reminder.id)
            .await
            .unwrap();
        assert_eq!(res.quantity, 4.0);
        assert_eq!(res.state, RecordState::Confirmed);

        let res = ctx.repos.reminder_records.delete(&reminder.id).await;
        assert!(res.is_some());
        assert!(ctx
            .repos
            .reminder_records
            .find(&reminder.id)
            .await
            .is_none());
    }

    #[tokio::test]
    async fn rejects_duplicate_partner_and_product() {
        let ctx = Context::create_inmemory();
        let reminder = record("P-1", "Office Suite");
        let duplicate = record("P-1", "Office Suite");

        assert!(ctx.repos.reminder_records.insert(&reminder).await.is_ok());
        assert!(ctx.repos.reminder_records.insert(&duplicate).await.is_err());

        // Same partner with another product is fine
        let other = record("P-1", "CAD Suite");
        assert!(ctx.repos.reminder_records.insert(&other).await.is_ok());
    }

    #[tokio::test]
    async fn find_active_skips_cancelled_records() {
        let ctx = Context::create_inmemory();
        let draft = record("P-1", "Office Suite");
        let mut confirmed = record("P-2", "Office Suite");
        confirmed.confirm();
        let mut cancelled = record("P-3", "Office Suite");
        cancelled.state = RecordState::Cancelled;

        for r in [&draft, &confirmed, &cancelled].iter() {
            ctx.repos.reminder_records.insert(r).await.unwrap();
        }

        let active = ctx.repos.reminder_records.find_active().await.unwrap();
        assert_eq!(active.len(), 2);
        assert!(active.iter().all(|r| r.state != RecordState::Cancelled));
    }

    #[tokio::test]
    async fn find_by_partner_and_product() {
        let ctx = Context::create_inmemory();
        let reminder = record("P-1", "Office Suite");
        ctx.repos.reminder_records.insert(&reminder).await.unwrap();

        let res = ctx
            .repos
            .reminder_records
            .find_by_partner_and_product("P-1", "Office Suite")
            .await
            .unwrap();
        assert!(res.eq(&reminder));

        assert!(ctx
            .repos
            .reminder_records
            .find_by_partner_and_product("P-1", "CAD Suite")
            .await
            .is_none());
    }
}
