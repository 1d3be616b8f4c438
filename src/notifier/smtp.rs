// notifier/smtp.rs

use crate::model::NotifyError;
use crate::notifier::{EmailMessage, Mailer};
use lettre::message::Mailbox;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use std::time::Duration;
use tracing::{info, warn};

pub struct SmtpSettings {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub from: String,
    pub to: String,
    pub timeout: Duration,
}

/// Authenticated relay with STARTTLS; sends the plain-text body only.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    to: Mailbox,
}

fn parse_mailbox(address: &str) -> Result<Mailbox, NotifyError> {
    address
        .parse::<Mailbox>()
        .map_err(|e| NotifyError::Build(format!("invalid address {:?}: {}", address, e)))
}

impl SmtpMailer {
    pub fn new(settings: SmtpSettings) -> Result<Self, NotifyError> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&settings.host)
            .map_err(|e| NotifyError::Smtp(e.to_string()))?
            .port(settings.port)
            .credentials(Credentials::new(settings.username, settings.password))
            .timeout(Some(settings.timeout))
            .build();

        Ok(Self {
            transport,
            from: parse_mailbox(&settings.from)?,
            to: parse_mailbox(&settings.to)?,
        })
    }

    pub fn build_message(&self, email: &EmailMessage) -> Result<Message, NotifyError> {
        Message::builder()
            .from(self.from.clone())
            .to(self.to.clone())
            .subject(email.subject.as_str())
            .header(ContentType::TEXT_PLAIN)
            .body(email.text.clone())
            .map_err(|e| NotifyError::Build(e.to_string()))
    }
}

#[async_trait::async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, email: &EmailMessage) -> Result<(), NotifyError> {
        let message = self.build_message(email)?;
        info!("📤 Sending mail via SMTP...");
        match self.transport.send(message).await {
            Ok(response) => {
                info!("✅ SMTP accepted message [{}]", response.code());
                Ok(())
            }
            Err(e) => {
                warn!("❌ SMTP send failed: {}", e);
                Err(NotifyError::Smtp(e.to_string()))
            }
        }
    }
}
