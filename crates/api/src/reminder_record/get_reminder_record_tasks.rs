use crate::error::ReminderError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use renewal_reminder_api_structs::get_reminder_record_tasks::{APIResponse, PathParams};
use renewal_reminder_domain::{FollowUpTask, ID};
use renewal_reminder_infra::Context;

pub async fn get_reminder_record_tasks_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<Context>,
) -> Result<HttpResponse, ReminderError> {
    let usecase = GetReminderRecordTasksUseCase {
        reminder_record_id: path_params.reminder_record_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|tasks| HttpResponse::Ok().json(APIResponse::new(tasks)))
        .map_err(ReminderError::from)
}

#[derive(Debug)]
pub struct GetReminderRecordTasksUseCase {
    pub reminder_record_id: ID,
}

#[derive(Debug)]
pub enum UseCaseError {
    StorageError,
    NotFound(ID),
}

impl From<UseCaseError> for ReminderError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::StorageError => Self::InternalError,
            UseCaseError::NotFound(record_id) => Self::NotFound(format!(
                "A reminder record with id: {}, was not found.",
                record_id
            )),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetReminderRecordTasksUseCase {
    type Response = Vec<FollowUpTask>;
    type Error = UseCaseError;

    const NAME: &'static str = "GetReminderRecordTasks";

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Error> {
        if ctx
            .repos
            .reminder_records
            .find(&self.reminder_record_id)
            .await
            .is_none()
        {
            return Err(UseCaseError::NotFound(self.reminder_record_id.clone()));
        }

        ctx.repos
            .follow_up_tasks
            .find_by_record(&self.reminder_record_id)
            .await
            .map_err(|_| UseCaseError::StorageError)
    }
}
