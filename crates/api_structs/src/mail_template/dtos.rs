use renewal_reminder_domain::{MailTemplate, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MailTemplateDTO {
    pub id: ID,
    pub identifier: String,
    pub subject: String,
    pub body: String,
}

impl MailTemplateDTO {
    pub fn new(template: MailTemplate) -> Self {
        Self {
            id: template.id,
            identifier: template.identifier,
            subject: template.subject,
            body: template.body,
        }
    }
}
