mod audit_entry;
mod follow_up_task;
mod mail_template;
mod reminder_record;
mod shared;
mod user;

use audit_entry::{IAuditEntryRepo, InMemoryAuditEntryRepo, PostgresAuditEntryRepo};
use follow_up_task::{IFollowUpTaskRepo, InMemoryFollowUpTaskRepo, PostgresFollowUpTaskRepo};
use mail_template::{IMailTemplateRepo, InMemoryMailTemplateRepo, PostgresMailTemplateRepo};
use reminder_record::{
    IReminderRecordRepo, InMemoryReminderRecordRepo, PostgresReminderRecordRepo,
};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tracing::info;
use user::{IUserRepo, InMemoryUserRepo, PostgresUserRepo};

#[derive(Clone)]
pub struct Repos {
    pub reminder_records: Arc<dyn IReminderRecordRepo>,
    pub users: Arc<dyn IUserRepo>,
    pub mail_templates: Arc<dyn IMailTemplateRepo>,
    pub audit_entries: Arc<dyn IAuditEntryRepo>,
    pub follow_up_tasks: Arc<dyn IFollowUpTaskRepo>,
}

impl Repos {
    pub async fn create_postgres(connection_string: &str) -> anyhow::Result<Self> {
        info!("DB CHECKING CONNECTION ...");
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(connection_string)
            .await?;
        info!("DB CHECKING CONNECTION ... [done]");

        Ok(Self {
            reminder_records: Arc::new(PostgresReminderRecordRepo::new(pool.clone())),
            users: Arc::new(PostgresUserRepo::new(pool.clone())),
            mail_templates: Arc::new(PostgresMailTemplateRepo::new(pool.clone())),
            audit_entries: Arc::new(PostgresAuditEntryRepo::new(pool.clone())),
            follow_up_tasks: Arc::new(PostgresFollowUpTaskRepo::new(pool)),
        })
    }

    pub fn create_inmemory() -> Self {
        Self {
            reminder_records: Arc::new(InMemoryReminderRecordRepo::new()),
            users: Arc::new(InMemoryUserRepo::new()),
            mail_templates: Arc::new(InMemoryMailTemplateRepo::new()),
            audit_entries: Arc::new(InMemoryAuditEntryRepo::new()),
            follow_up_tasks: Arc::new(InMemoryFollowUpTaskRepo::new()),
        }
    }
}
