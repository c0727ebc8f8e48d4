mod audit_entry;
mod follow_up_task;
mod mail_template;
mod reminder_record;
mod shared;
mod user;

pub use audit_entry::AuditEntry;
pub use follow_up_task::FollowUpTask;
pub use mail_template::{MailTemplate, RenderedMail, DEADLINE_REMINDER_TEMPLATE};
pub use reminder_record::{RecordState, ReminderLead, ReminderRecord, StateTransitionError};
pub use shared::entity::{Entity, ID};
pub use user::User;
