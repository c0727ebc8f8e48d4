use super::dtos::MailTemplateDTO;
use renewal_reminder_domain::MailTemplate;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MailTemplateResponse {
    pub mail_template: MailTemplateDTO,
}

impl MailTemplateResponse {
    pub fn new(template: MailTemplate) -> Self {
        Self {
            mail_template: MailTemplateDTO::new(template),
        }
    }
}

pub mod upsert_mail_template {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub identifier: String,
    }

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub subject: String,
        pub body: String,
    }

    pub type APIResponse = MailTemplateResponse;
}

pub mod get_mail_template {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub identifier: String,
    }

    pub type APIResponse = MailTemplateResponse;
}
