use super::IMailTemplateRepo;
use renewal_reminder_domain::MailTemplate;
use sqlx::{types::Uuid, FromRow, PgPool};
use tracing::error;

pub struct PostgresMailTemplateRepo {
    pool: PgPool,
}

impl PostgresMailTemplateRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct MailTemplateRaw {
    mail_template_uid: Uuid,
    identifier: String,
    subject: String,
    body: String,
}

impl From<MailTemplateRaw> for MailTemplate {
    fn from(e: MailTemplateRaw) -> Self {
        Self {
            id: e.mail_template_uid.into(),
            identifier: e.identifier,
            subject: e.subject,
            body: e.body,
        }
    }
}

#[async_trait::async_trait]
impl IMailTemplateRepo for PostgresMailTemplateRepo {
    async fn insert(&self, template: &MailTemplate) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO mail_templates(mail_template_uid, identifier, subject, body)
            VALUES($1, $2, $3, $4)
            "#,
        )
        .bind(template.id.inner_ref())
        .bind(&template.identifier)
        .bind(&template.subject)
        .bind(&template.body)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Unable to insert mail template: {:?}. DB returned error: {:?}",
                template, e
            );
            e
        })?;
        Ok(())
    }

    async fn save(&self, template: &MailTemplate) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE mail_templates
            SET identifier = $2,
            subject = $3,
            body = $4
            WHERE mail_template_uid = $1
            "#,
        )
        .bind(template.id.inner_ref())
        .bind(&template.identifier)
        .bind(&template.subject)
        .bind(&template.body)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Unable to save mail template: {:?}. DB returned error: {:?}",
                template, e
            );
            e
        })?;
        Ok(())
    }

    async fn find_by_identifier(&self, identifier: &str) -> Option<MailTemplate> {
        let res: Option<MailTemplateRaw> = sqlx::query_as(
            r#"
            SELECT * FROM mail_templates
            WHERE identifier = $1
            "#,
        )
        .bind(identifier)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Find mail template with identifier: {} failed. DB returned error: {:?}",
                identifier, e
            );
            e
        })
        .ok()?;
        res.map(|template| template.into())
    }
}
