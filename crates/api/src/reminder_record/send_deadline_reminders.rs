use crate::shared::usecase::UseCase;
use renewal_reminder_domain::{AuditEntry, FollowUpTask, ID, DEADLINE_REMINDER_TEMPLATE};
use renewal_reminder_infra::{Context, Mail};
use tracing::{debug, info};

/// The daily sweep over all draft and confirmed records. A record fires on
/// exactly the day `purchase_deadline - reminder_lead` equals today: the
/// reminder mail is sent, a follow up task is created for the responsible
/// user and the action is logged on the record.
///
/// When no `deadline_reminder` mail template is configured the whole run
/// is skipped without side effects, so an incomplete setup never fails
/// the scheduled job.
#[derive(Debug)]
pub struct SendDeadlineRemindersUseCase {}

#[derive(Debug)]
pub struct UseCaseRes {
    /// Ids of the records whose reminder fired this run
    pub notified_record_ids: Vec<ID>,
}

#[derive(Debug)]
pub enum UseCaseError {
    StorageError,
    MailerError,
    UserNotFound(ID),
}

#[async_trait::async_trait(?Send)]
impl UseCase for SendDeadlineRemindersUseCase {
    type Response = UseCaseRes;
    type Error = UseCaseError;

    const NAME: &'static str = "SendDeadlineReminders";

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Error> {
        let template = match ctx
            .repos
            .mail_templates
            .find_by_identifier(DEADLINE_REMINDER_TEMPLATE)
            .await
        {
            Some(template) => template,
            None => {
                debug!("No deadline reminder mail template is configured. Skipping this run.");
                return Ok(UseCaseRes {
                    notified_record_ids: Vec::new(),
                });
            }
        };

        let today = ctx.sys.today();
        let records = ctx
            .repos
            .reminder_records
            .find_active()
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        let mut notified_record_ids = Vec::new();
        for record in records {
            let deadline = match record.purchase_deadline {
                Some(deadline) => deadline,
                None => continue,
            };
            // target_reminder_date is Some whenever the deadline is
            let target_reminder_date = match record.target_reminder_date() {
                Some(date) => date,
                None => continue,
            };
            if target_reminder_date != today {
                continue;
            }

            let user = match ctx.repos.users.find(&record.user_id).await {
                Some(user) => user,
                None => return Err(UseCaseError::UserNotFound(record.user_id.clone())),
            };

            let rendered = template.render(&record);
            ctx.mailer
                .send(Mail {
                    to: record.recipient_email.clone(),
                    subject: rendered.subject,
                    body: rendered.body,
                    force_send: true,
                })
                .await
                .map_err(|_| UseCaseError::MailerError)?;

            let task = FollowUpTask::new(
                &record.id,
                &user.id,
                format!(
                    "DEADLINE ALERT: Follow up on {} (Due in {} days)",
                    record.product_name,
                    record.reminder_lead.days()
                ),
                format!(
                    "Reminder email sent to {}. Follow up before: {}.",
                    record.recipient_email, deadline
                ),
                today,
                ctx.sys.get_timestamp_millis(),
            );
            ctx.repos
                .follow_up_tasks
                .insert(&task)
                .await
                .map_err(|_| UseCaseError::StorageError)?;

            let entry = AuditEntry::new(
                &record.id,
                format!(
                    "Deadline reminder email sent and activity created for {}.",
                    user.name
                ),
                ctx.sys.get_timestamp_millis(),
            );
            ctx.repos
                .audit_entries
                .insert(&entry)
                .await
                .map_err(|_| UseCaseError::StorageError)?;

            notified_record_ids.push(record.id.clone());
        }

        info!(
            "Deadline reminder sweep done, notified {} record(s)",
            notified_record_ids.len()
        );
        Ok(UseCaseRes {
            notified_record_ids,
        })
    }
}
