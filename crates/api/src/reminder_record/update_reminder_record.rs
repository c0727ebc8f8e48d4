use crate::error::ReminderError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use chrono::NaiveDate;
use renewal_reminder_api_structs::update_reminder_record::{APIResponse, PathParams, RequestBody};
use renewal_reminder_domain::{AuditEntry, RecordState, ReminderLead, ReminderRecord, ID};
use renewal_reminder_infra::Context;
use rust_decimal::Decimal;

pub async fn update_reminder_record_controller(
    path_params: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<Context>,
) -> Result<HttpResponse, ReminderError> {
    let body = body.0;
    let usecase = UpdateReminderRecordUseCase {
        reminder_record_id: path_params.reminder_record_id.clone(),
        partner_number: body.partner_number,
        product_name: body.product_name,
        quantity: body.quantity,
        price: body.price,
        currency: body.currency,
        purchase_deadline: body.purchase_deadline,
        recipient_email: body.recipient_email,
        reminder_lead: body.reminder_lead,
        user_id: body.user_id,
        state: body.state,
    };

    execute(usecase, &ctx)
        .await
        .map(|record| HttpResponse::Ok().json(APIResponse::new(record, ctx.sys.today())))
        .map_err(ReminderError::from)
}

/// Updates a single record. When the purchase deadline changes, an audit
/// entry with the old and the new date is appended before the record is
/// persisted.
#[derive(Debug)]
pub struct UpdateReminderRecordUseCase {
    pub reminder_record_id: ID,
    pub partner_number: Option<String>,
    pub product_name: Option<String>,
    pub quantity: Option<f64>,
    pub price: Option<Decimal>,
    pub currency: Option<String>,
    pub purchase_deadline: Option<NaiveDate>,
    pub recipient_email: Option<String>,
    pub reminder_lead: Option<ReminderLead>,
    pub user_id: Option<ID>,
    pub state: Option<RecordState>,
}

#[derive(Debug)]
pub enum UseCaseError {
    StorageError,
    NotFound(ID),
    UserNotFound(ID),
    DuplicateRecord,
}

impl From<UseCaseError> for ReminderError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::StorageError => Self::InternalError,
            UseCaseError::NotFound(record_id) => Self::NotFound(format!(
                "A reminder record with id: {}, was not found.",
                record_id
            )),
            UseCaseError::UserNotFound(user_id) => {
                Self::NotFound(format!("A user with id: {}, was not found.", user_id))
            }
            UseCaseError::DuplicateRecord => Self::Conflict(
                "A reminder already exists for this Partner Number and Product Name combination. \
                 Please check your existing records."
                    .into(),
            ),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateReminderRecordUseCase {
    type Response = ReminderRecord;
    type Error = UseCaseError;

    const NAME: &'static str = "UpdateReminderRecord";

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Error> {
        let mut record = match ctx.repos.reminder_records.find(&self.reminder_record_id).await {
            Some(record) => record,
            None => return Err(UseCaseError::NotFound(self.reminder_record_id.clone())),
        };

        let partner_number = self
            .partner_number
            .clone()
            .unwrap_or_else(|| record.partner_number.clone());
        let product_name = self
            .product_name
            .clone()
            .unwrap_or_else(|| record.product_name.clone());
        if partner_number != record.partner_number || product_name != record.product_name {
            if ctx
                .repos
                .reminder_records
                .find_by_partner_and_product(&partner_number, &product_name)
                .await
                .is_some()
            {
                return Err(UseCaseError::DuplicateRecord);
            }
        }

        if let Some(user_id) = &self.user_id {
            if ctx.repos.users.find(user_id).await.is_none() {
                return Err(UseCaseError::UserNotFound(user_id.clone()));
            }
            record.user_id = user_id.clone();
        }

        // A deadline change is logged before the record is persisted
        if let Some(new_deadline) = self.purchase_deadline {
            if let Some(old_deadline) = record.purchase_deadline {
                if old_deadline != new_deadline {
                    let entry = AuditEntry::new(
                        &record.id,
                        format!(
                            "Purchase Deadline Modified: {} → {}",
                            old_deadline.format("%Y-%m-%d"),
                            new_deadline.format("%Y-%m-%d")
                        ),
                        ctx.sys.get_timestamp_millis(),
                    );
                    ctx.repos
                        .audit_entries
                        .insert(&entry)
                        .await
                        .map_err(|_| UseCaseError::StorageError)?;
                }
            }
            record.purchase_deadline = Some(new_deadline);
        }

        record.partner_number = partner_number;
        record.product_name = product_name;
        if let Some(quantity) = self.quantity {
            record.quantity = quantity;
        }
        if let Some(price) = self.price {
            record.price = price;
        }
        if let Some(currency) = self.currency.clone() {
            record.currency = currency;
        }
        if let Some(recipient_email) = self.recipient_email.clone() {
            record.recipient_email = recipient_email;
        }
        if let Some(reminder_lead) = self.reminder_lead {
            record.reminder_lead = reminder_lead;
        }
        if let Some(state) = self.state {
            record.state = state;
        }

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
    use renewal_reminder_domain::User;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    async fn setup_record(ctx: &Context, deadline: NaiveDate) -> ReminderRecord {
        let user = User::new("Rania".into(), "rania@example.com".into());
        ctx.repos.users.insert(&user).await.unwrap();
        let record = ReminderRecord::new(
            "P-1001".into(),
            "Antivirus License".into(),
            Decimal::new(9900, 2),
            deadline,
            &user.id,
        );
        ctx.repos.reminder_records.insert(&record).await.unwrap();
        record
    }

    fn update(record_id: &ID) -> UpdateReminderRecordUseCase {
        UpdateReminderRecordUseCase {
            reminder_record_id: record_id.clone(),
            partner_number: None,
            product_name: None,
            quantity: None,
            price: None,
            currency: None,
            purchase_deadline: None,
            recipient_email: None,
            reminder_lead: None,
            user_id: None,
            state: None,
        }
    }

    #[tokio::test]
    async fn changing_the_deadline_appends_one_audit_entry() {
        let ctx = Context::create_inmemory();
        let record = setup_record(&ctx, ymd(2025, 1, 10)).await;

        let mut usecase = update(&record.id);
        usecase.purchase_deadline = Some(ymd(2025, 2, 1));
        let updated = execute(usecase, &ctx).await.unwrap();
        assert_eq!(updated.purchase_deadline, Some(ymd(2025, 2, 1)));

        let entries = ctx
            .repos
            .audit_entries
            .find_by_record(&record.id)
            .await
            .unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(
            entries[0].body,
            "Purchase Deadline Modified: 2025-01-10 → 2025-02-01"
        );
    }

    #[tokio::test]
    async fn saving_the_same_deadline_is_not_logged() {
        let ctx = Context::create_inmemory();
        let record = setup_record(&ctx, ymd(2025, 1, 10)).await;

        let mut usecase = update(&record.id);
        usecase.purchase_deadline = Some(ymd(2025, 1, 10));
        execute(usecase, &ctx).await.unwrap();

        let entries = ctx
            .repos
            .audit_entries
            .find_by_record(&record.id)
            .await
            .unwrap();
        assert!(entries.is_empty());
    }

    #[tokio::test]
    async fn field_edits_keep_derived_values_consistent() {
        let ctx = Context::create_inmemory();
        let record = setup_record(&ctx, ymd(2025, 1, 10)).await;

        let mut usecase = update(&record.id);
        usecase.quantity = Some(3.0);
        usecase.price = Some(Decimal::new(1000, 2));
        let updated = execute(usecase, &ctx).await.unwrap();
        assert_eq!(updated.total_value(), Decimal::new(3000, 2));
    }

    #[tokio::test]
    async fn rejects_update_to_an_already_used_partner_and_product() {
        let ctx = Context::create_inmemory();
        let record = setup_record(&ctx, ymd(2025, 1, 10)).await;
        let other = ReminderRecord::new(
            "P-2002".into(),
            "Antivirus License".into(),
            Decimal::new(9900, 2),
            ymd(2025, 1, 10),
            &record.user_id,
        );
        ctx.repos.reminder_records.insert(&other).await.unwrap();

        let mut usecase = update(&other.id);
        usecase.partner_number = Some("P-1001".into());
        let res = execute(usecase, &ctx).await;
        assert!(matches!(res, Err(UseCaseError::DuplicateRecord)));
    }

    #[tokio::test]
    async fn allows_saving_a_record_unchanged() {
        let ctx = Context::create_inmemory();
        let record = setup_record(&ctx, ymd(2025, 1, 10)).await;

        let mut usecase = update(&record.id);
        usecase.partner_number = Some(record.partner_number.clone());
        usecase.product_name = Some(record.product_name.clone());
        assert!(execute(usecase, &ctx).await.is_ok());
    }

    #[tokio::test]
    async fn cancels_through_the_generic_state_edit() {
        let ctx = Context::create_inmemory();
        let record = setup_record(&ctx, ymd(2025, 1, 10)).await;

        let mut usecase = update(&record.id);
        usecase.state = Some(RecordState::Cancelled);
        let updated = execute(usecase, &ctx).await.unwrap();
        assert_eq!(updated.state, RecordState::Cancelled);
    }

    #[tokio::test]
    async fn unknown_record_is_not_found() {
        let ctx = Context::create_inmemory();
        let res = execute(update(&ID::default()), &ctx).await;
        assert!(matches!(res, Err(UseCaseError::NotFound(_))));
    }
}
