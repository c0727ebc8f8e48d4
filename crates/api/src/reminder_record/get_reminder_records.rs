use crate::error::ReminderError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use renewal_reminder_api_structs::get_reminder_records::{APIResponse, QueryParams};
use renewal_reminder_domain::{RecordState, ReminderRecord};
use renewal_reminder_infra::Context;

pub async fn get_reminder_records_controller(
    query_params: web::Query<QueryParams>,
    ctx: web::Data<Context>,
) -> Result<HttpResponse, ReminderError> {
    let usecase = GetReminderRecordsUseCase {
        state: query_params.0.state,
    };

    execute(usecase, &ctx)
        .await
        .map(|records| HttpResponse::Ok().json(APIResponse::new(records, ctx.sys.today())))
        .map_err(ReminderError::from)
}

#[derive(Debug)]
pub struct GetReminderRecordsUseCase {
    pub state: Option<RecordState>,
}

#[derive(Debug)]
pub enum UseCaseError {
    StorageError,
}

impl From<UseCaseError> for ReminderError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetReminderRecordsUseCase {
    type Response = Vec<ReminderRecord>;
    type Error = UseCaseError;

    const NAME: &'static str = "GetReminderRecords";

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Error> {
        let mut records = ctx
            .repos
            .reminder_records
            .find_all()
            .await
            .map_err(|_| UseCaseError::StorageError)?;
        if let Some(state) = self.state {
            records.retain(|record| record.state == state);
        }
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use renewal_reminder_domain::{ReminderRecord, User};
    use rust_decimal::Decimal;

    #[tokio::test]
    async fn filters_by_state() {
        let ctx = Context::create_inmemory();
        let user = User::new("Rania".into(), "rania@example.com".into());
        ctx.repos.users.insert(&user).await.unwrap();

        let deadline = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
        let draft = ReminderRecord::new(
            "P-1".into(),
            "Office Suite".into(),
            Decimal::new(100, 0),
            deadline,
            &user.id,
        );
        let mut confirmed = ReminderRecord::new(
            "P-2".into(),
            "Office Suite".into(),
            Decimal::new(100, 0),
            deadline,
            &user.id,
        );
        confirmed.confirm();
        ctx.repos.reminder_records.insert(&draft).await.unwrap();
        ctx.repos.reminder_records.insert(&confirmed).await.unwrap();

        let all = execute(GetReminderRecordsUseCase { state: None }, &ctx)
            .await
            .unwrap();
        assert_eq!(all.len(), 2);

        let confirmed_only = execute(
            GetReminderRecordsUseCase {
                state: Some(RecordState::Confirmed),
            },
            &ctx,
        )
        .await
        .unwrap();
        assert_eq!(confirmed_only.len(), 1);
        assert_eq!(confirmed_only[0].id, confirmed.id);
    }
}
