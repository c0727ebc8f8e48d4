use super::dtos::{AuditEntryDTO, FollowUpTaskDTO, ReminderRecordDTO};
use chrono::NaiveDate;
use renewal_reminder_domain::{
    AuditEntry, FollowUpTask, RecordState, ReminderLead, ReminderRecord, ID,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderRecordResponse {
    pub reminder_record: ReminderRecordDTO,
}

impl ReminderRecordResponse {
    pub fn new(record: ReminderRecord, today: NaiveDate) -> Self {
        Self {
            reminder_record: ReminderRecordDTO::new(record, today),
        }
    }
}

pub mod create_reminder_record {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub partner_number: String,
        pub product_name: String,
        pub price: Decimal,
        pub purchase_deadline: NaiveDate,
        pub user_id: ID,
        pub quantity: Option<f64>,
        pub currency: Option<String>,
        pub recipient_email: Option<String>,
        pub reminder_lead: Option<ReminderLead>,
    }

    pub type APIResponse = ReminderRecordResponse;
}

pub mod get_reminder_record {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub reminder_record_id: ID,
    }

    pub type APIResponse = ReminderRecordResponse;
}

pub mod get_reminder_records {
    use super::*;

    #[derive(Debug, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct QueryParams {
        pub state: Option<RecordState>,
    }

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub reminder_records: Vec<ReminderRecordDTO>,
    }

    impl APIResponse {
        pub fn new(records: Vec<ReminderRecord>, today: NaiveDate) -> Self {
            Self {
                reminder_records: records
                    .into_iter()
                    .map(|record| ReminderRecordDTO::new(record, today))
                    .collect(),
            }
        }
    }
}

pub mod update_reminder_record {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub reminder_record_id: ID,
    }

    #[derive(Debug, Deserialize, Serialize, Default)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub partner_number: Option<String>,
        pub product_name: Option<String>,
        pub quantity: Option<f64>,
        pub price: Option<Decimal>,
        pub currency: Option<String>,
        pub purchase_deadline: Option<NaiveDate>,
        pub recipient_email: Option<String>,
        pub reminder_lead: Option<ReminderLead>,
        pub user_id: Option<ID>,
        pub state: Option<RecordState>,
    }

    pub type APIResponse = ReminderRecordResponse;
}

pub mod delete_reminder_record {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub reminder_record_id: ID,
    }

    pub type APIResponse = ReminderRecordResponse;
}

pub mod confirm_reminder_record {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub reminder_record_id: ID,
    }

    pub type APIResponse = ReminderRecordResponse;
}

pub mod draft_reminder_record {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub reminder_record_id: ID,
    }

    pub type APIResponse = ReminderRecordResponse;
}

pub mod get_reminder_record_audit {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub reminder_record_id: ID,
    }

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub audit_entries: Vec<AuditEntryDTO>,
    }

    impl APIResponse {
        pub fn new(entries: Vec<AuditEntry>) -> Self {
            Self {
                audit_entries: entries.into_iter().map(AuditEntryDTO::new).collect(),
            }
        }
    }
}

pub mod get_reminder_record_tasks {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub reminder_record_id: ID,
    }

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub follow_up_tasks: Vec<FollowUpTaskDTO>,
    }

    impl APIResponse {
        pub fn new(tasks: Vec<FollowUpTask>) -> Self {
            Self {
                follow_up_tasks: tasks.into_iter().map(FollowUpTaskDTO::new).collect(),
            }
        }
    }
}
