mod inmemory;
mod postgres;

pub use inmemory::InMemoryMailTemplateRepo;
pub use postgres::PostgresMailTemplateRepo;
use renewal_reminder_domain::MailTemplate;

#[async_trait::async_trait]
pub trait IMailTemplateRepo: Send + Sync {
    async fn insert(&self, template: &MailTemplate) -> anyhow::Result<()>;
    async fn save(&self, template: &MailTemplate) -> anyhow::Result<()>;
    async fn find_by_identifier(&self, identifier: &str) -> Option<MailTemplate>;
}

#[cfg(test)]
mod tests {
    use crate::Context;
    use renewal_reminder_domain::{MailTemplate, DEADLINE_REMINDER_TEMPLATE};

    #[tokio::test]
    async fn insert_and_update() {
        let ctx = Context::create_inmemory();
        assert!(ctx
            .repos
            .mail_templates
            .find_by_identifier(DEADLINE_REMINDER_TEMPLATE)
            .await
            .is_none());

        let mut template = MailTemplate::new(
            DEADLINE_REMINDER_TEMPLATE.into(),
            "Renew {{display_name}}".into(),
            "Due on {{purchase_deadline}}".into(),
        );
        assert!(ctx.repos.mail_templates.insert(&template).await.is_ok());

        template.subject = "Action required: {{display_name}}".into();
        assert!(ctx.repos.mail_templates.save(&template).await.is_ok());

        let res = ctx
            .repos
            .mail_templates
            .find_by_identifier(DEADLINE_REMINDER_TEMPLATE)
            .await
            .unwrap();
        assert_eq!(res.subject, "Action required: {{display_name}}");
    }
}
