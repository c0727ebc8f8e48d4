use super::IReminderRecordRepo;
use crate::repos::shared::inmemory_repo::*;
use renewal_reminder_domain::{RecordState, ReminderRecord, ID};

pub struct InMemoryReminderRecordRepo {
    reminder_records: std::sync::Mutex<Vec<ReminderRecord>>,
}

impl InMemoryReminderRecordRepo {
    pub fn new() -> Self {
        Self {
            reminder_records: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IReminderRecordRepo for InMemoryReminderRecordRepo {
    async fn insert(&self, record: &ReminderRecord) -> anyhow::Result<()> {
        let duplicates = find_by(&self.reminder_records, |r: &ReminderRecord| {
            r.partner_number == record.partner_number && r.product_name == record.product_name
        });
        if !duplicates.is_empty() {
            anyhow::bail!(
                "A reminder already exists for partner number {} and product {}",
                record.partner_number,
                record.product_name
            );
        }
        insert(record, &self.reminder_records);
        Ok(())
    }

    async fn save(&self, record: &ReminderRecord) -> anyhow::Result<()> {
        save(record, &self.reminder_records);
        Ok(())
    }

    async fn find(&self, record_id: &ID) -> Option<ReminderRecord> {
        find(record_id, &self.reminder_records)
    }

    async fn find_all(&self) -> anyhow::Result<Vec<ReminderRecord>> {
        Ok(find_by(&self.reminder_records, |_| true))
    }

    async fn find_active(&self) -> anyhow::Result<Vec<ReminderRecord>> {
        Ok(find_by(&self.reminder_records, |r: &ReminderRecord| {
            r.state == RecordState::Draft || r.state == RecordState::Confirmed
        }))
    }

    async fn find_by_partner_and_product(
        &self,
        partner_number: &str,
        product_name: &str,
    ) -> Option<ReminderRecord> {
        find_by(&self.reminder_records, |r: &ReminderRecord| {
            r.partner_number == partner_number && r.product_name == product_name
        })
        .into_iter()
        .next()
    }

    async fn delete(&self, record_id: &ID) -> Option<ReminderRecord> {
        delete(record_id, &self.reminder_records)
    }
}
