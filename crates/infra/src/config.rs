use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the application to run on
    pub port: usize,
    /// Recipient used when a record is created without an explicit
    /// reminder email address
    pub default_recipient_email: String,
    /// ISO 4217 code applied to records created without an explicit
    /// currency
    pub company_currency: String,
    /// Endpoint of the mail gateway the deadline reminders are posted to.
    /// When unset, outgoing mail is kept in memory.
    pub mail_gateway_url: Option<String>,
    pub mail_gateway_api_key: Option<String>,
}

impl Config {
    pub fn new() -> Self {
        let default_port = "5000";
        let port = std::env::var("PORT").unwrap_or(default_port.into());
        let port = match port.parse::<usize>() {
            Ok(port) => port,
            Err(_) => {
                warn!(
                    "The given PORT: {} is not valid, falling back to the default port: {}.",
                    port, default_port
                );
                default_port.parse::<usize>().unwrap()
            }
        };
        let default_recipient_email = match std::env::var("DEFAULT_REMINDER_RECIPIENT_EMAIL") {
            Ok(email) => email,
            Err(_) => {
                let email = "renewals@example.com".to_string();
                info!(
                    "Did not find DEFAULT_REMINDER_RECIPIENT_EMAIL environment variable. Falling back to: {}",
                    email
                );
                email
            }
        };
        let company_currency =
            std::env::var("COMPANY_CURRENCY").unwrap_or_else(|_| "USD".to_string());
        let mail_gateway_url = std::env::var("MAIL_GATEWAY_URL").ok();
        let mail_gateway_api_key = std::env::var("MAIL_GATEWAY_API_KEY").ok();

        Self {
            port,
            default_recipient_email,
            company_currency,
            mail_gateway_url,
            mail_gateway_api_key,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
