use crate::error::ReminderError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use renewal_reminder_api_structs::get_mail_template::{APIResponse, PathParams};
use renewal_reminder_domain::MailTemplate;
use renewal_reminder_infra::Context;

pub async fn get_mail_template_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<Context>,
) -> Result<HttpResponse, ReminderError> {
    let usecase = GetMailTemplateUseCase {
        identifier: path_params.identifier.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|template| HttpResponse::Ok().json(APIResponse::new(template)))
        .map_err(ReminderError::from)
}

#[derive(Debug)]
pub struct GetMailTemplateUseCase {
    pub identifier: String,
}

#[derive(Debug)]
pub enum UseCaseError {
    TemplateNotFound(String),
}

impl From<UseCaseError> for ReminderError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::TemplateNotFound(identifier) => Self::NotFound(format!(
                "A mail template with identifier: {}, was not found.",
                identifier
            )),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetMailTemplateUseCase {
    type Response = MailTemplate;
    type Error = UseCaseError;

    const NAME: &'static str = "GetMailTemplate";

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Error> {
        match ctx
            .repos
            .mail_templates
            .find_by_identifier(&self.identifier)
            .await
        {
            Some(template) => Ok(template),
            None => Err(UseCaseError::TemplateNotFound(self.identifier.clone())),
        }
    }
}
