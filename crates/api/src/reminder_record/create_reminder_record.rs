use crate::error::ReminderError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use chrono::NaiveDate;
use renewal_reminder_api_structs::create_reminder_record::{APIResponse, RequestBody};
use renewal_reminder_domain::{ReminderLead, ReminderRecord, ID};
use renewal_reminder_infra::Context;
use rust_decimal::Decimal;

pub async fn create_reminder_record_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<Context>,
) -> Result<HttpResponse, ReminderError> {
    let body = body.0;
    let usecase = CreateReminderRecordUseCase {
        partner_number: body.partner_number,
        product_name: body.product_name,
        price: body.price,
        purchase_deadline: body.purchase_deadline,
        user_id: body.user_id,
        quantity: body.quantity,
        currency: body.currency,
        recipient_email: body.recipient_email,
        reminder_lead: body.reminder_lead,
    };

    execute(usecase, &ctx)
        .await
        .map(|record| HttpResponse::Created().json(APIResponse::new(record, ctx.sys.today())))
        .map_err(ReminderError::from)
}

#[derive(Debug)]
pub struct CreateReminderRecordUseCase {
    pub partner_number: String,
    pub product_name: String,
    pub price: Decimal,
    pub purchase_deadline: NaiveDate,
    pub user_id: ID,
    pub quantity: Option<f64>,
    pub currency: Option<String>,
    pub recipient_email: Option<String>,
    pub reminder_lead: Option<ReminderLead>,
}

#[derive(Debug)]
pub enum UseCaseError {
    StorageError,
    UserNotFound(ID),
    DuplicateRecord,
    EmptyField(&'static str),
}

impl From<UseCaseError> for ReminderError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::StorageError => Self::InternalError,
            UseCaseError::UserNotFound(user_id) => {
                Self::NotFound(format!("A user with id: {}, was not found.", user_id))
            }
            UseCaseError::DuplicateRecord => Self::Conflict(
                "A reminder already exists for this Partner Number and Product Name combination. \
                 Please check your existing records."
                    .into(),
            ),
            UseCaseError::EmptyField(field) => {
                Self::BadClientData(format!("The field {} must not be empty.", field))
            }
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateReminderRecordUseCase {
    type Response = ReminderRecord;
    type Error = UseCaseError;

    const NAME: &'static str = "CreateReminderRecord";

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Error> {
        if self.partner_number.trim().is_empty() {
            return Err(UseCaseError::EmptyField("partnerNumber"));
        }
        if self.product_name.trim().is_empty() {
            return Err(UseCaseError::EmptyField("productName"));
        }

        let user = match ctx.repos.users.find(&self.user_id).await {
            Some(user) => user,
            None => return Err(UseCaseError::UserNotFound(self.user_id.clone())),
        };

        if ctx
            .repos
            .reminder_records
            .find_by_partner_and_product(&self.partner_number, &self.product_name)
            .await
            .is_some()
        {
            return Err(UseCaseError::DuplicateRecord);
        }

        let mut record = ReminderRecord::new(
            self.partner_number.clone(),
            self.product_name.clone(),
            self.price,
            self.purchase_deadline,
            &user.id,
        );
        if let Some(quantity) = self.quantity {
            record.quantity = quantity;
        }
        if let Some(reminder_lead) = self.reminder_lead {
            record.reminder_lead = reminder_lead;
        }
        record.currency = self
            .currency
            .clone()
            .unwrap_or_else(|| ctx.config.company_currency.clone());
        record.recipient_email = self
            .recipient_email
            .clone()
            .unwrap_or_else(|| ctx.config.default_recipient_email.clone());

        let res = ctx.repos.reminder_records.insert(&record).await;
        match res {
            Ok(_) => Ok(record),
            Err(_) => Err(UseCaseError::StorageError),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use renewal_reminder_domain::{RecordState, User};

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    async fn setup_user(ctx: &Context) -> User {
        let user = User::new("Rania".into(), "rania@example.com".into());
        ctx.repos.users.insert(&user).await.unwrap();
        user
    }

    fn usecase(user_id: &ID) -> CreateReminderRecordUseCase {
        CreateReminderRecordUseCase {
            partner_number: "P-1001".into(),
            product_name: "Antivirus License".into(),
            price: Decimal::new(9900, 2),
            purchase_deadline: ymd(2025, 9, 1),
            user_id: user_id.clone(),
            quantity: None,
            currency: None,
            recipient_email: None,
            reminder_lead: None,
        }
    }

    #[tokio::test]
    async fn creates_record_with_defaults() {
        let ctx = Context::create_inmemory();
        let user = setup_user(&ctx).await;

        let record = execute(usecase(&user.id), &ctx).await.unwrap();
        assert_eq!(record.state, RecordState::Draft);
        assert_eq!(record.quantity, 1.0);
        assert_eq!(record.reminder_lead.days(), 30);
        assert_eq!(record.currency, ctx.config.company_currency);
        assert_eq!(record.recipient_email, ctx.config.default_recipient_email);
        assert!(ctx.repos.reminder_records.find(&record.id).await.is_some());
    }

    #[tokio::test]
    async fn rejects_duplicate_partner_and_product() {
        let ctx = Context::create_inmemory();
        let user = setup_user(&ctx).await;

        assert!(execute(usecase(&user.id), &ctx).await.is_ok());
        let res = execute(usecase(&user.id), &ctx).await;
        assert!(matches!(res, Err(UseCaseError::DuplicateRecord)));
    }

    #[tokio::test]
    async fn rejects_unknown_responsible_user() {
        let ctx = Context::create_inmemory();
        let res = execute(usecase(&ID::default()), &ctx).await;
        assert!(matches!(res, Err(UseCaseError::UserNotFound(_))));
    }

    #[tokio::test]
    async fn rejects_empty_partner_number() {
        let ctx = Context::create_inmemory();
        let user = setup_user(&ctx).await;
        let mut usecase = usecase(&user.id);
        usecase.partner_number = " ".into();
        let res = execute(usecase, &ctx).await;
        assert!(matches!(res, Err(UseCaseError::EmptyField("partnerNumber"))));
    }
}
