pub mod mailersend;
pub mod message;
pub mod smtp;

pub use mailersend::MailerSendMailer;
pub use message::EmailMessage;
pub use smtp::{SmtpMailer, SmtpSettings};

use crate::config::{MailConfig, MailTransport};
use crate::model::{DealRecord, NotifyError};
use tracing::{info, warn};

/// Capability to deliver one composed email.
#[async_trait::async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: &EmailMessage) -> Result<(), NotifyError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyOutcome {
    NoDeals,
    NotConfigured,
    Sent,
    Failed,
}

pub struct EmailNotifier {
    mailer: Option<Box<dyn Mailer>>,
}

impl EmailNotifier {
    pub fn new(mailer: Option<Box<dyn Mailer>>) -> Self {
        Self { mailer }
    }

    /// Picks the backend named by the config. A backend that cannot be built disables delivery.
    pub fn from_config(cfg: Option<&MailConfig>) -> Self {
        let mailer = cfg.and_then(|cfg| match build_mailer(cfg) {
            Ok(mailer) => Some(mailer),
            Err(e) => {
                warn!("Email delivery disabled: {}", e);
                None
            }
        });
        Self::new(mailer)
    }

    pub async fn notify(&self, deals: &[DealRecord]) -> NotifyOutcome {
        if deals.is_empty() {
            info!("No deals to notify.");
            return NotifyOutcome::NoDeals;
        }
        info!("Found {} MATCHING deals!", deals.len());

        let Some(mailer) = self.mailer.as_ref() else {
            warn!("Missing mail configuration, skipping email.");
            return NotifyOutcome::NotConfigured;
        };

        let email = EmailMessage::from_deals(deals);
        match mailer.send(&email).await {
            Ok(()) => {
                info!("Email sent successfully!");
                NotifyOutcome::Sent
            }
            Err(e) => {
                warn!("Failed to send email: {}", e);
                NotifyOutcome::Failed
            }
        }
    }
}

pub fn build_mailer(cfg: &MailConfig) -> Result<Box<dyn Mailer>, NotifyError> {
    let mailer: Box<dyn Mailer> = match &cfg.transport {
        MailTransport::MailerSend { api_token } => Box::new(MailerSendMailer::new(
            api_token.clone(),
            cfg.from.clone(),
            cfg.to.clone(),
            cfg.timeout,
        )?),
        MailTransport::Smtp {
            host,
            port,
            username,
            password,
        } => Box::new(SmtpMailer::new(SmtpSettings {
            host: host.clone(),
            port: *port,
            username: username.clone(),
            password: password.clone(),
            from: cfg.from.clone(),
            to: cfg.to.clone(),
            timeout: cfg.timeout,
        })?),
    };
    Ok(mailer)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    /// Records every message instead of sending it.
    #[derive(Clone, Default)]
    pub struct RecordingMailer {
        pub sent: Arc<Mutex<Vec<EmailMessage>>>,
        pub fail: bool,
    }

    #[async_trait::async_trait]
    impl Mailer for RecordingMailer {
        async fn send(&self, email: &EmailMessage) -> Result<(), NotifyError> {
            self.sent.lock().unwrap().push(email.clone());
            if self.fail {
                Err(NotifyError::ApiError("status 422: rejected".into()))
            } else {
                Ok(())
            }
        }
    }

    fn deal() -> DealRecord {
        DealRecord {
            vin: "5YJ3E1EA0".into(),
            year: "2020".into(),
            price: 23000.0,
            lease_payment: 150.0,
            link: crate::utils::order_link("5YJ3E1EA0"),
        }
    }

    #[tokio::test]
    async fn empty_batch_does_nothing() {
        let mailer = RecordingMailer::default();
        let notifier = EmailNotifier::new(Some(Box::new(mailer.clone())));

        assert_eq!(notifier.notify(&[]).await, NotifyOutcome::NoDeals);
        assert!(mailer.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn missing_config_skips_delivery() {
        let notifier = EmailNotifier::from_config(None);
        assert_eq!(notifier.notify(&[deal()]).await, NotifyOutcome::NotConfigured);
    }

    #[tokio::test]
    async fn sends_one_summary() {
        let mailer = RecordingMailer::default();
        let notifier = EmailNotifier::new(Some(Box::new(mailer.clone())));

        assert_eq!(notifier.notify(&[deal(), deal()]).await, NotifyOutcome::Sent);
        let sent = mailer.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].subject, "Tesla Alert: 2 Lease Deal(s) Found!");
    }

    #[tokio::test]
    async fn delivery_failure_is_reported_not_raised() {
        let mailer = RecordingMailer { fail: true, ..Default::default() };
        let notifier = EmailNotifier::new(Some(Box::new(mailer.clone())));

        assert_eq!(notifier.notify(&[deal()]).await, NotifyOutcome::Failed);
        assert_eq!(mailer.sent.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn invalid_sender_disables_delivery() {
        let cfg = MailConfig {
            transport: MailTransport::Smtp {
                host: "smtp.example.com".into(),
                port: 587,
                username: "watcher".into(),
                password: "secret".into(),
            },
            from: "watcher".into(),
            to: "me@example.com".into(),
            timeout: Duration::from_secs(10),
        };
        let notifier = EmailNotifier::from_config(Some(&cfg));
        assert_eq!(notifier.notify(&[deal()]).await, NotifyOutcome::NotConfigured);
    }
}
