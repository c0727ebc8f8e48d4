use super::IFollowUpTaskRepo;
use crate::repos::shared::inmemory_repo::*;
use renewal_reminder_domain::{FollowUpTask, ID};

pub struct InMemoryFollowUpTaskRepo {
    follow_up_tasks: std::sync::Mutex<Vec<FollowUpTask>>,
}

impl InMemoryFollowUpTaskRepo {
    pub fn new() -> Self {
        Self {
            follow_up_tasks: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IFollowUpTaskRepo for InMemoryFollowUpTaskRepo {
    async fn insert(&self, task: &FollowUpTask) -> anyhow::Result<()> {
        insert(task, &self.follow_up_tasks);
        Ok(())
    }

    async fn find_by_record(&self, record_id: &ID) -> anyhow::Result<Vec<FollowUpTask>> {
        Ok(find_by(&self.follow_up_tasks, |t: &FollowUpTask| {
            t.reminder_record_id == *record_id
        }))
    }

    async fn find_by_user(&self, user_id: &ID) -> anyhow::Result<Vec<FollowUpTask>> {
        Ok(find_by(&self.follow_up_tasks, |t: &FollowUpTask| {
            t.user_id == *user_id
        }))
    }

    async fn delete_by_record(&self, record_id: &ID) -> anyhow::Result<()> {
        find_and_delete_by(&self.follow_up_tasks, |t: &FollowUpTask| {
            t.reminder_record_id == *record_id
        });
        Ok(())
    }
}
