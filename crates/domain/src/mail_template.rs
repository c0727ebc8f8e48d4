use crate::reminder_record::ReminderRecord;
use crate::shared::entity::{Entity, ID};

/// Identifier of the template used by the daily deadline reminder sweep.
/// When no template with this identifier is stored, the sweep is a no-op.
pub const DEADLINE_REMINDER_TEMPLATE: &str = "deadline_reminder";

/// A stored mail template. Subject and body may contain `{{variable}}`
/// placeholders which are substituted per record, see
/// [`MailTemplate::render`].
#[derive(Debug, Clone)]
pub struct MailTemplate {
    pub id: ID,
    /// Unique name templates are looked up by
    pub identifier: String,
    pub subject: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderedMail {
    pub subject: String,
    pub body: String,
}

impl MailTemplate {
    pub fn new(identifier: String, subject: String, body: String) -> Self {
        Self {
            id: Default::default(),
            identifier,
            subject,
            body,
        }
    }

    /// Substitute the record's values into the template. Unknown
    /// placeholders are left untouched.
    pub fn render(&self, record: &ReminderRecord) -> RenderedMail {
        let deadline = record
            .purchase_deadline
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default();
        let vars = [
            ("partner_number", record.partner_number.clone()),
            ("product_name", record.product_name.clone()),
            ("display_name", record.display_name()),
            ("purchase_deadline", deadline),
            ("reminder_days", record.reminder_lead.days().to_string()),
            ("quantity", record.quantity.to_string()),
            ("price", record.price.to_string()),
            ("total_value", record.total_value().to_string()),
            ("currency", record.currency.clone()),
        ];

        RenderedMail {
            subject: substitute(&self.subject, &vars),
            body: substitute(&self.body, &vars),
        }
    }
}

fn substitute(text: &str, vars: &[(&str, String)]) -> String {
    let mut rendered = text.to_string();
    for (name, value) in vars {
        rendered = rendered.replace(&format!("{{{{{}}}}}", name), value);
    }
    rendered
}

impl Entity for MailTemplate {
    fn id(&self) -> &ID {
        &self.id
    }
}
