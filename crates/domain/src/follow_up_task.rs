use crate::shared::entity::{Entity, ID};
use chrono::NaiveDate;

/// A to-do created for the responsible `User` when a deadline reminder
/// fires.
#[derive(Debug, Clone)]
pub struct FollowUpTask {
    pub id: ID,
    pub reminder_record_id: ID,
    /// The assignee
    pub user_id: ID,
    pub summary: String,
    pub note: String,
    pub due_date: NaiveDate,
    /// Unix timestamp in millis
    pub created_at: i64,
}

impl FollowUpTask {
    pub fn new(
        reminder_record_id: &ID,
        user_id: &ID,
        summary: String,
        note: String,
        due_date: NaiveDate,
        created_at: i64,
    ) -> Self {
        Self {
            id: Default::default(),
            reminder_record_id: reminder_record_id.clone(),
            user_id: user_id.clone(),
            summary,
            note,
            due_date,
            created_at,
        }
    }
}

impl Entity for FollowUpTask {
    fn id(&self) -> &ID {
        &self.id
    }
}
