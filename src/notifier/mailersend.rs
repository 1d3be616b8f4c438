// notifier/mailersend.rs

use crate::model::NotifyError;
use crate::notifier::{EmailMessage, Mailer};
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;
use tracing::{info, warn};

pub const MAILERSEND_URL: &str = "https://api.mailersend.com/v1/email";
const SENDER_NAME: &str = "Tesla Watcher";
const RECIPIENT_NAME: &str = "User";

#[derive(Debug, Serialize)]
struct Address<'a> {
    email: &'a str,
    name: &'a str,
}

#[derive(Debug, Serialize)]
struct MailerSendPayload<'a> {
    from: Address<'a>,
    to: Vec<Address<'a>>,
    subject: &'a str,
    text: &'a str,
    html: &'a str,
}

pub struct MailerSendMailer {
    api_token: String,
    from: String,
    to: String,
    url: String,
    client: Client,
}

impl MailerSendMailer {
    pub fn new(api_token: String, from: String, to: String, timeout: Duration) -> Result<Self, NotifyError> {
        Self::with_url(MAILERSEND_URL, api_token, from, to, timeout)
    }

    /// Same as `new`, posting to `url` instead of the public API.
    pub fn with_url(
        url: impl Into<String>,
        api_token: String,
        from: String,
        to: String,
        timeout: Duration,
    ) -> Result<Self, NotifyError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| NotifyError::ApiError(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self {
            api_token,
            from,
            to,
            url: url.into(),
            client,
        })
    }

    fn payload<'a>(&'a self, email: &'a EmailMessage) -> MailerSendPayload<'a> {
        MailerSendPayload {
            from: Address { email: &self.from, name: SENDER_NAME },
            to: vec![Address { email: &self.to, name: RECIPIENT_NAME }],
            subject: &email.subject,
            text: &email.text,
            html: &email.html,
        }
    }
}

#[async_trait::async_trait]
impl Mailer for MailerSendMailer {
    async fn send(&self, email: &EmailMessage) -> Result<(), NotifyError> {
        info!("📤 Sending mail via MailerSend API...");
        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_token)
            .header("X-Requested-With", "XMLHttpRequest")
            .json(&self.payload(email))
            .send()
            .await
            .map_err(|e| {
                warn!("❌ MailerSend send() failed: {:?}", e);
                if e.is_timeout() {
                    NotifyError::Unreachable
                } else {
                    NotifyError::ApiError(format!("Send failed: {}", e))
                }
            })?;

        let status = response.status();
        let body = response.text().await.unwrap_or_else(|_| "unknown".into());
        if !matches!(status.as_u16(), 200 | 202) {
            warn!("❌ MailerSend API responded [{}]: {}", status, body);
            return Err(NotifyError::ApiError(format!("status {}: {}", status, body)));
        }
        info!("✅ MailerSend response [{}]", status);
        Ok(())
    }
}
