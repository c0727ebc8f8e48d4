use crate::error::ReminderError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use renewal_reminder_api_structs::draft_reminder_record::{APIResponse, PathParams};
use renewal_reminder_domain::{ReminderRecord, StateTransitionError, ID};
use renewal_reminder_infra::Context;

pub async fn draft_reminder_record_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<Context>,
) -> Result<HttpResponse, ReminderError> {
    let usecase = DraftReminderRecordUseCase {
        reminder_record_id: path_params.reminder_record_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|record| HttpResponse::Ok().json(APIResponse::new(record, ctx.sys.today())))
        .map_err(ReminderError::from)
}

/// Resets a record to draft. Cancelled records are rejected, cancellation
/// is final.
#[derive(Debug)]
pub struct DraftReminderRecordUseCase {
    pub reminder_record_id: ID,
}

#[derive(Debug)]
pub enum UseCaseError {
    StorageError,
    NotFound(ID),
    InvalidTransition(StateTransitionError),
}

impl From<UseCaseError> for ReminderError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::StorageError => Self::InternalError,
            UseCaseError::NotFound(record_id) => Self::NotFound(format!(
                "A reminder record with id: {}, was not found.",
                record_id
            )),
            UseCaseError::InvalidTransition(e) => Self::BadClientData(e.to_string()),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for DraftReminderRecordUseCase {
    type Response = ReminderRecord;
    type Error = UseCaseError;

    const NAME: &'static str = "DraftReminderRecord";

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Error> {
        let mut record = match ctx
            .repos
            .reminder_records
            .find(&self.reminder_record_id)
            .await
        {
            Some(record) => record,
            None => return Err(UseCaseError::NotFound(self.reminder_record_id.clone())),
        };

        record
            .reset_to_draft()
            .map_err(UseCaseError::InvalidTransition)?;

        let res = ctx.repos.reminder_records.save(&record).await;
        match res {
            Ok(_) => Ok(record),
            Err(_) => Err(UseCaseError::StorageError),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use renewal_reminder_domain::{RecordState, ReminderRecord, User};
    use rust_decimal::Decimal;

    async fn setup_record(ctx: &Context, state: RecordState) -> ReminderRecord {
        let user = User::new("Rania".into(), "rania@example.com".into());
        ctx.repos.users.insert(&user).await.unwrap();
        let mut record = ReminderRecord::new(
            "P-1".into(),
            "Office Suite".into(),
            Decimal::new(100, 0),
            NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
            &user.id,
        );
        record.state = state;
        ctx.repos.reminder_records.insert(&record).await.unwrap();
        record
    }

    #[tokio::test]
    async fn reopens_a_confirmed_record() {
        let ctx = Context::create_inmemory();
        let record = setup_record(&ctx, RecordState::Confirmed).await;

        let usecase = DraftReminderRecordUseCase {
            reminder_record_id: record.id.clone(),
        };
        let res = execute(usecase, &ctx).await.unwrap();
        assert_eq!(res.state, RecordState::Draft);
    }

    #[tokio::test]
    async fn rejects_a_cancelled_record() {
        let ctx = Context::create_inmemory();
        let record = setup_record(&ctx, RecordState::Cancelled).await;

        let usecase = DraftReminderRecordUseCase {
            reminder_record_id: record.id.clone(),
        };
        let res = execute(usecase, &ctx).await;
        assert!(matches!(res, Err(UseCaseError::InvalidTransition(_))));

        // The stored record is untouched
        let stored = ctx.repos.reminder_records.find(&record.id).await.unwrap();
        assert_eq!(stored.state, RecordState::Cancelled);
    }
}
