use serde::Serialize;
use std::sync::Mutex;
use tracing::error;

/// A single outgoing mail, already rendered.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Mail {
    pub to: String,
    pub subject: String,
    pub body: String,
    /// Ask the gateway to deliver right away instead of queueing
    pub force_send: bool,
}

/// Outgoing mail dispatch. The service does not deliver mail itself, it
/// hands the rendered message to a gateway.
#[async_trait::async_trait]
pub trait IMailer: Send + Sync {
    async fn send(&self, mail: Mail) -> anyhow::Result<()>;
}

/// Posts mail as JSON to the configured mail gateway endpoint.
pub struct MailGateway {
    url: String,
    api_key: Option<String>,
    client: reqwest::Client,
}

impl MailGateway {
    pub fn new(url: String, api_key: Option<String>) -> Self {
        Self {
            url,
            api_key,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait::async_trait]
impl IMailer for MailGateway {
    async fn send(&self, mail: Mail) -> anyhow::Result<()> {
        let mut req = self.client.post(&self.url).json(&mail);
        if let Some(api_key) = &self.api_key {
            req = req.header("x-api-key", api_key);
        }
        let res = req.send().await.map_err(|e| {
            error!(
                "Unable to reach mail gateway at {}. Error: {:?}",
                self.url, e
            );
            e
        })?;
        res.error_for_status()?;
        Ok(())
    }
}

/// Keeps sent mail in memory. Used in tests and when no gateway is
/// configured.
pub struct InMemoryMailer {
    sent: Mutex<Vec<Mail>>,
}

impl InMemoryMailer {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn sent_mail(&self) -> Vec<Mail> {
        self.sent.lock().unwrap().clone()
    }
}

impl Default for InMemoryMailer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl IMailer for InMemoryMailer {
    async fn send(&self, mail: Mail) -> anyhow::Result<()> {
        self.sent.lock().unwrap().push(mail);
        Ok(())
    }
}
