use crate::shared::entity::{Entity, ID};

/// Append-only log line attached to a `ReminderRecord`. Written when the
/// purchase deadline is modified and when the deadline reminder fires.
#[derive(Debug, Clone)]
pub struct AuditEntry {
    pub id: ID,
    pub reminder_record_id: ID,
    pub body: String,
    /// Unix timestamp in millis
    pub created_at: i64,
}

impl AuditEntry {
    pub fn new(reminder_record_id: &ID, body: String, created_at: i64) -> Self {
        Self {
            id: Default::default(),
            reminder_record_id: reminder_record_id.clone(),
            body,
            created_at,
        }
    }
}

impl Entity for AuditEntry {
    fn id(&self) -> &ID {
        &self.id
    }
}
