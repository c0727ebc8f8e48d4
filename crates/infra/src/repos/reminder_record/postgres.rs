use super::IReminderRecordRepo;
use chrono::NaiveDate;
use renewal_reminder_domain::{RecordState, ReminderLead, ReminderRecord, ID};
use rust_decimal::Decimal;
use sqlx::{types::Uuid, FromRow, PgPool};
use std::convert::TryFrom;
use tracing::error;

pub struct PostgresReminderRecordRepo {
    pool: PgPool,
}

impl PostgresReminderRecordRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ReminderRecordRaw {
    reminder_record_uid: Uuid,
    partner_number: String,
    product_name: String,
    quantity: f64,
    price: Decimal,
    currency: String,
    purchase_deadline: Option<NaiveDate>,
    recipient_email: String,
    reminder_lead_days: i16,
    user_uid: Uuid,
    state: String,
}

impl From<ReminderRecordRaw> for ReminderRecord {
    fn from(e: ReminderRecordRaw) -> Self {
        Self {
            id: e.reminder_record_uid.into(),
            partner_number: e.partner_number,
            product_name: e.product_name,
            quantity: e.quantity,
            price: e.price,
            currency: e.currency,
            purchase_deadline: e.purchase_deadline,
            recipient_email: e.recipient_email,
            // The columns are constrained, stored values are always valid
            reminder_lead: ReminderLead::try_from(e.reminder_lead_days as i64).unwrap(),
            user_id: e.user_uid.into(),
            state: e.state.parse::<RecordState>().unwrap(),
        }
    }
}

#[async_trait::async_trait]
impl IReminderRecordRepo for PostgresReminderRecordRepo {
    async fn insert(&self, record: &ReminderRecord) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO reminder_records(
                reminder_record_uid, partner_number, product_name, quantity,
                price, currency, purchase_deadline, recipient_email,
                reminder_lead_days, user_uid, state
            )
            VALUES($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(record.id.inner_ref())
        .bind(&record.partner_number)
        .bind(&record.product_name)
        .bind(record.quantity)
        .bind(record.price)
        .bind(&record.currency)
        .bind(record.purchase_deadline)
        .bind(&record.recipient_email)
        .bind(record.reminder_lead.days() as i16)
        .bind(record.user_id.inner_ref())
        .bind(record.state.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Unable to insert reminder record: {:?}. DB returned error: {:?}",
                record, e
            );
            e
        })?;
        Ok(())
    }

    async fn save(&self, record: &ReminderRecord) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE reminder_records
            SET partner_number = $2,
            product_name = $3,
            quantity = $4,
            price = $5,
            currency = $6,
            purchase_deadline = $7,
            recipient_email = $8,
            reminder_lead_days = $9,
            user_uid = $10,
            state = $11
            WHERE reminder_record_uid = $1
            "#,
        )
        .bind(record.id.inner_ref())
        .bind(&record.partner_number)
        .bind(&record.product_name)
        .bind(record.quantity)
        .bind(record.price)
        .bind(&record.currency)
        .bind(record.purchase_deadline)
        .bind(&record.recipient_email)
        .bind(record.reminder_lead.days() as i16)
        .bind(record.user_id.inner_ref())
        .bind(record.state.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Unable to save reminder record: {:?}. DB returned error: {:?}",
                record, e
            );
            e
        })?;
        Ok(())
    }

    async fn find(&self, record_id: &ID) -> Option<ReminderRecord> {
        let res: Option<ReminderRecordRaw> = sqlx::query_as(
            r#"
            SELECT * FROM reminder_records
            WHERE reminder_record_uid = $1
            "#,
        )
        .bind(record_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Find reminder record with id: {:?} failed. DB returned error: {:?}",
                record_id, e
            );
            e
        })
        .ok()?;
        res.map(|record| record.into())
    }

    async fn find_all(&self) -> anyhow::Result<Vec<ReminderRecord>> {
        let records_raw: Vec<ReminderRecordRaw> = sqlx::query_as(
            r#"
            SELECT * FROM reminder_records
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!("Find all reminder records failed. DB returned error: {:?}", e);
            e
        })?;
        Ok(records_raw.into_iter().map(|r| r.into()).collect())
    }

    async fn find_active(&self) -> anyhow::Result<Vec<ReminderRecord>> {
        let records_raw: Vec<ReminderRecordRaw> = sqlx::query_as(
            r#"
            SELECT * FROM reminder_records
            WHERE state IN ('draft', 'confirmed')
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Find active reminder records failed. DB returned error: {:?}",
                e
            );
            e
        })?;
        Ok(records_raw.into_iter().map(|r| r.into()).collect())
    }

    async fn find_by_partner_and_product(
        &self,
        partner_number: &str,
        product_name: &str,
    ) -> Option<ReminderRecord> {
        let res: Option<ReminderRecordRaw> = sqlx::query_as(
            r#"
            SELECT * FROM reminder_records
            WHERE partner_number = $1 AND product_name = $2
            "#,
        )
        .bind(partner_number)
        .bind(product_name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Find reminder record for partner: {} and product: {} failed. DB returned error: {:?}",
                partner_number, product_name, e
            );
            e
        })
        .ok()?;
        res.map(|record| record.into())
    }

    async fn delete(&self, record_id: &ID) -> Option<ReminderRecord> {
        let res: Option<ReminderRecordRaw> = sqlx::query_as(
            r#"
            DELETE FROM reminder_records
            WHERE reminder_record_uid = $1
            RETURNING *
            "#,
        )
        .bind(record_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Delete reminder record with id: {:?} failed. DB returned error: {:?}",
                record_id, e
            );
            e
        })
        .ok()?;
        res.map(|record| record.into())
    }
}
