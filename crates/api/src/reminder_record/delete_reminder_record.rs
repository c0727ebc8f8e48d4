use crate::error::ReminderError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use renewal_reminder_api_structs::delete_reminder_record::{APIResponse, PathParams};
use renewal_reminder_domain::{ReminderRecord, ID};
use renewal_reminder_infra::Context;

pub async fn delete_reminder_record_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<Context>,
) -> Result<HttpResponse, ReminderError> {
    let usecase = DeleteReminderRecordUseCase {
        reminder_record_id: path_params.reminder_record_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|record| HttpResponse::Ok().json(APIResponse::new(record, ctx.sys.today())))
        .map_err(ReminderError::from)
}

/// Deletes a record together with its audit trail and follow up tasks.
#[derive(Debug)]
pub struct DeleteReminderRecordUseCase {
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
impl UseCase for DeleteReminderRecordUseCase {
    type Response = ReminderRecord;
    type Error = UseCaseError;

    const NAME: &'static str = "DeleteReminderRecord";

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Error> {
        let record = match ctx
            .repos
            .reminder_records
            .delete(&self.reminder_record_id)
            .await
        {
            Some(record) => record,
            None => return Err(UseCaseError::NotFound(self.reminder_record_id.clone())),
        };

        ctx.repos
            .audit_entries
            .delete_by_record(&record.id)
            .await
            .map_err(|_| UseCaseError::StorageError)?;
        ctx.repos
            .follow_up_tasks
            .delete_by_record(&record.id)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use renewal_reminder_domain::{AuditEntry, ReminderRecord, User};
    use rust_decimal::Decimal;

    #[tokio::test]
    async fn deletes_record_and_its_trail() {
        let ctx = Context::create_inmemory();
        let user = User::new("Rania".into(), "rania@example.com".into());
        ctx.repos.users.insert(&user).await.unwrap();
        let record = ReminderRecord::new(
            "P-1".into(),
            "Office Suite".into(),
            Decimal::new(100, 0),
            NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
            &user.id,
        );
        ctx.repos.reminder_records.insert(&record).await.unwrap();
        let entry = AuditEntry::new(&record.id, "note".into(), 0);
        ctx.repos.audit_entries.insert(&entry).await.unwrap();

        let usecase = DeleteReminderRecordUseCase {
            reminder_record_id: record.id.clone(),
        };
        assert!(execute(usecase, &ctx).await.is_ok());

        assert!(ctx.repos.reminder_records.find(&record.id).await.is_none());
        assert!(ctx
            .repos
            .audit_entries
            .find_by_record(&record.id)
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn unknown_record_is_not_found() {
        let ctx = Context::create_inmemory();
        let usecase = DeleteReminderRecordUseCase {
            reminder_record_id: Default::default(),
        };
        assert!(matches!(
            execute(usecase, &ctx).await,
            Err(UseCaseError::NotFound(_))
        ));
    }
}
