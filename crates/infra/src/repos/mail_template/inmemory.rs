use super::IMailTemplateRepo;
use crate::repos::shared::inmemory_repo::*;
use renewal_reminder_domain::MailTemplate;

pub struct InMemoryMailTemplateRepo {
    mail_templates: std::sync::Mutex<Vec<MailTemplate>>,
}

impl InMemoryMailTemplateRepo {
    pub fn new() -> Self {
        Self {
            mail_templates: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IMailTemplateRepo for InMemoryMailTemplateRepo {
    async fn insert(&self, template: &MailTemplate) -> anyhow::Result<()> {
        insert(template, &self.mail_templates);
        Ok(())
    }

    async fn save(&self, template: &MailTemplate) -> anyhow::Result<()> {
        save(template, &self.mail_templates);
        Ok(())
    }

    async fn find_by_identifier(&self, identifier: &str) -> Option<MailTemplate> {
        find_by(&self.mail_templates, |t: &MailTemplate| {
            t.identifier == identifier
        })
        .into_iter()
        .next()
    }
}
