use chrono::NaiveDate;
use renewal_reminder_domain::{
    AuditEntry, FollowUpTask, RecordState, ReminderLead, ReminderRecord, ID,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A `ReminderRecord` as served by the API. The derived attributes
/// (`days_to_deadline`, `total_value`, `color`, `display_name`) are
/// computed from the stored fields at response time.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ReminderRecordDTO {
    pub id: ID,
    pub partner_number: String,
    pub product_name: String,
    pub quantity: f64,
    pub price: Decimal,
    pub currency: String,
    pub purchase_deadline: Option<NaiveDate>,
    pub recipient_email: String,
    pub reminder_lead: ReminderLead,
    pub user_id: ID,
    pub state: RecordState,
    pub display_name: String,
    pub days_to_deadline: i64,
    pub total_value: Decimal,
    pub color: i32,
}

impl ReminderRecordDTO {
    pub fn new(record: ReminderRecord, today: NaiveDate) -> Self {
        Self {
            id: record.id.clone(),
            display_name: record.display_name(),
            days_to_deadline: record.days_to_deadline(today),
            total_value: record.total_value(),
            color: record.color(today),
            partner_number: record.partner_number,
            product_name: record.product_name,
            quantity: record.quantity,
            price: record.price,
            currency: record.currency,
            purchase_deadline: record.purchase_deadline,
            recipient_email: record.recipient_email,
            reminder_lead: record.reminder_lead,
            user_id: record.user_id,
            state: record.state,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AuditEntryDTO {
    pub id: ID,
    pub reminder_record_id: ID,
    pub body: String,
    pub created_at: i64,
}

impl AuditEntryDTO {
    pub fn new(entry: AuditEntry) -> Self {
        Self {
            id: entry.id,
            reminder_record_id: entry.reminder_record_id,
            body: entry.body,
            created_at: entry.created_at,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct FollowUpTaskDTO {
    pub id: ID,
    pub reminder_record_id: ID,
    pub user_id: ID,
    pub summary: String,
    pub note: String,
    pub due_date: NaiveDate,
    pub created_at: i64,
}

impl FollowUpTaskDTO {
    pub fn new(task: FollowUpTask) -> Self {
        Self {
            id: task.id,
            reminder_record_id: task.reminder_record_id,
            user_id: task.user_id,
            summary: task.summary,
            note: task.note,
            due_date: task.due_date,
            created_at: task.created_at,
        }
    }
}
