mod inmemory;
mod postgres;

pub use inmemory::InMemoryFollowUpTaskRepo;
pub use postgres::PostgresFollowUpTaskRepo;
use renewal_reminder_domain::{FollowUpTask, ID};

#[async_trait::async_trait]
pub trait IFollowUpTaskRepo: Send + Sync {
    async fn insert(&self, task: &FollowUpTask) -> anyhow::Result<()>;
    async fn find_by_record(&self, record_id: &ID) -> anyhow::Result<Vec<FollowUpTask>>;
    async fn find_by_user(&self, user_id: &ID) -> anyhow::Result<Vec<FollowUpTask>>;
    async fn delete_by_record(&self, record_id: &ID) -> anyhow::Result<()>;
}

#[cfg(test)]
mod tests {
    use crate::Context;
    use chrono::NaiveDate;
    use renewal_reminder_domain::{FollowUpTask, ID};

    fn task(record_id: &ID, user_id: &ID) -> FollowUpTask {
        FollowUpTask::new(
            record_id,
            user_id,
            "Follow up".into(),
            "Reminder email sent".into(),
            NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
            0,
        )
    }

    #[tokio::test]
    async fn finds_by_record_and_user() {
        let ctx = Context::create_inmemory();
        let record_id = ID::default();
        let user_id = ID::default();
        let other_user_id = ID::default();

        ctx.repos
            .follow_up_tasks
            .insert(&task(&record_id, &user_id))
            .await
            .unwrap();
        ctx.repos
            .follow_up_tasks
            .insert(&task(&ID::default(), &other_user_id))
            .await
            .unwrap();

        let by_record = ctx
            .repos
            .follow_up_tasks
            .find_by_record(&record_id)
            .await
            .unwrap();
        assert_eq!(by_record.len(), 1);

        let by_user = ctx
            .repos
            .follow_up_tasks
            .find_by_user(&user_id)
            .await
            .unwrap();
        assert_eq!(by_user.len(), 1);
        assert_eq!(by_user[0].user_id, user_id);
    }

    #[tokio::test]
    async fn delete_by_record() {
        let ctx = Context::create_inmemory();
        let record_id = ID::default();
        let user_id = ID::default();

        ctx.repos
            .follow_up_tasks
            .insert(&task(&record_id, &user_id))
            .await
            .unwrap();
        ctx.repos
            .follow_up_tasks
            .delete_by_record(&record_id)
            .await
            .unwrap();

        assert!(ctx
            .repos
            .follow_up_tasks
            .find_by_record(&record_id)
            .await
            .unwrap()
            .is_empty());
    }
}
