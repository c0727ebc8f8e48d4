use super::IFollowUpTaskRepo;
use chrono::NaiveDate;
use renewal_reminder_domain::{FollowUpTask, ID};
use sqlx::{types::Uuid, FromRow, PgPool};
use tracing::error;

pub struct PostgresFollowUpTaskRepo {
    pool: PgPool,
}

impl PostgresFollowUpTaskRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct FollowUpTaskRaw {
    follow_up_task_uid: Uuid,
    reminder_record_uid: Uuid,
    user_uid: Uuid,
    summary: String,
    note: String,
    due_date: NaiveDate,
    created_at: i64,
}

impl From<FollowUpTaskRaw> for FollowUpTask {
    fn from(e: FollowUpTaskRaw) -> Self {
        Self {
            id: e.follow_up_task_uid.into(),
            reminder_record_id: e.reminder_record_uid.into(),
            user_id: e.user_uid.into(),
            summary: e.summary,
            note: e.note,
            due_date: e.due_date,
            created_at: e.created_at,
        }
    }
}

#[async_trait::async_trait]
impl IFollowUpTaskRepo for PostgresFollowUpTaskRepo {
    async fn insert(&self, task: &FollowUpTask) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO follow_up_tasks(
                follow_up_task_uid, reminder_record_uid, user_uid,
                summary, note, due_date, created_at
            )
            VALUES($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(task.id.inner_ref())
        .bind(task.reminder_record_id.inner_ref())
        .bind(task.user_id.inner_ref())
        .bind(&task.summary)
        .bind(&task.note)
        .bind(task.due_date)
        .bind(task.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Unable to insert follow up task: {:?}. DB returned error: {:?}",
                task, e
            );
            e
        })?;
        Ok(())
    }

    async fn find_by_record(&self, record_id: &ID) -> anyhow::Result<Vec<FollowUpTask>> {
        let tasks_raw: Vec<FollowUpTaskRaw> = sqlx::query_as(
            r#"
            SELECT * FROM follow_up_tasks
            WHERE reminder_record_uid = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(record_id.inner_ref())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Find follow up tasks for record: {:?} failed. DB returned error: {:?}",
                record_id, e
            );
            e
        })?;
        Ok(tasks_raw.into_iter().map(|t| t.into()).collect())
    }

    async fn find_by_user(&self, user_id: &ID) -> anyhow::Result<Vec<FollowUpTask>> {
        let tasks_raw: Vec<FollowUpTaskRaw> = sqlx::query_as(
            r#"
            SELECT * FROM follow_up_tasks
            WHERE user_uid = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(user_id.inner_ref())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Find follow up tasks for user: {:?} failed. DB returned error: {:?}",
                user_id, e
            );
            e
        })?;
        Ok(tasks_raw.into_iter().map(|t| t.into()).collect())
    }

    async fn delete_by_record(&self, record_id: &ID) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            DELETE FROM follow_up_tasks
            WHERE reminder_record_uid = $1
            "#,
        )
        .bind(record_id.inner_ref())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Delete follow up tasks for record: {:?} failed. DB returned error: {:?}",
                record_id, e
            );
            e
        })?;
        Ok(())
    }
}
