use crate::error::ReminderError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use renewal_reminder_api_structs::upsert_mail_template::{APIResponse, PathParams, RequestBody};
use renewal_reminder_domain::MailTemplate;
use renewal_reminder_infra::Context;

pub async fn upsert_mail_template_controller(
    path_params: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<Context>,
) -> Result<HttpResponse, ReminderError> {
    let usecase = UpsertMailTemplateUseCase {
        identifier: path_params.identifier.clone(),
        subject: body.0.subject,
        body: body.0.body,
    };

    execute(usecase, &ctx)
        .await
        .map(|template| HttpResponse::Ok().json(APIResponse::new(template)))
        .map_err(ReminderError::from)
}

#[derive(Debug)]
pub struct UpsertMailTemplateUseCase {
    pub identifier: String,
    pub subject: String,
    pub body: String,
}

#[derive(Debug)]
pub enum UseCaseError {
    StorageError,
    InvalidIdentifier,
}

impl From<UseCaseError> for ReminderError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::StorageError => Self::InternalError,
            UseCaseError::InvalidIdentifier => {
                Self::BadClientData("The template identifier must not be empty.".into())
            }
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpsertMailTemplateUseCase {
    type Response = MailTemplate;
    type Error = UseCaseError;

    const NAME: &'static str = "UpsertMailTemplate";

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Error> {
        if self.identifier.trim().is_empty() {
            return Err(UseCaseError::InvalidIdentifier);
        }

        let template = match ctx
            .repos
            .mail_templates
            .find_by_identifier(&self.identifier)
            .await
        {
            Some(mut existing) => {
                existing.subject = self.subject.clone();
                existing.body = self.body.clone();
                ctx.repos
                    .mail_templates
                    .save(&existing)
                    .await
                    .map_err(|_| UseCaseError::StorageError)?;
                existing
            }
            None => {
                let template = MailTemplate::new(
                    self.identifier.clone(),
                    self.subject.clone(),
                    self.body.clone(),
                );
                ctx.repos
                    .mail_templates
                    .insert(&template)
                    .await
                    .map_err(|_| UseCaseError::StorageError)?;
                template
            }
        };

        Ok(template)
    }
}
