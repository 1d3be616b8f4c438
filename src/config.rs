use crate::model::ConfigError;
use crate::scraper::SearchQuery;
use std::time::Duration;
use tracing::{info, warn};

pub const INVENTORY_ENDPOINT: &str = "https://www.tesla.com/inventory/api/v4/inventory-results";
pub const INVENTORY_REFERER: &str = "https://www.tesla.com/inventory/used/m3";
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
pub const MAX_LEASE_PAYMENT: f64 = 175.0;

const FETCH_TIMEOUT_SECS: u64 = 20;
const NOTIFY_TIMEOUT_SECS: u64 = 10;
const DEFAULT_SMTP_PORT: u16 = 587;

#[derive(Debug, Clone)]
pub struct InventoryConfig {
    pub endpoint: String,
    pub referer: String,
    pub user_agent: String,
    pub timeout: Duration,
    pub query: SearchQuery,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            endpoint: INVENTORY_ENDPOINT.to_string(),
            referer: INVENTORY_REFERER.to_string(),
            user_agent: BROWSER_USER_AGENT.to_string(),
            timeout: Duration::from_secs(FETCH_TIMEOUT_SECS),
            query: SearchQuery::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum MailTransport {
    MailerSend { api_token: String },
    Smtp {
        host: String,
        port: u16,
        username: String,
        password: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct MailConfig {
    pub transport: MailTransport,
    pub from: String,
    pub to: String,
    pub timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub inventory: InventoryConfig,
    pub max_lease_payment: f64,
    /// `None` disables delivery; fetch and extraction still run.
    pub mail: Option<MailConfig>,
}

impl AppConfig {
    /// Reads the process environment, seeded from `.env` when one exists.
    pub fn from_env() -> Self {
        match dotenvy::dotenv() {
            Ok(path) => info!("Loaded environment from {}", path.display()),
            Err(e) if e.not_found() => {}
            Err(e) => warn!("Failed to read .env file: {}", e),
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mail = match MailConfig::from_lookup(&lookup) {
            Ok(cfg) => Some(cfg),
            Err(e) => {
                warn!("Email delivery disabled: {}", e);
                None
            }
        };

        Self {
            inventory: InventoryConfig::default(),
            max_lease_payment: MAX_LEASE_PAYMENT,
            mail,
        }
    }
}

impl MailConfig {
    pub fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let transport = match get("MAIL_TRANSPORT") {
            Some(name) => name.trim().to_lowercase(),
            None if get("MAILERSEND_API_TOKEN").is_some() => "mailersend".to_string(),
            None if get("SMTP_HOST").is_some() => "smtp".to_string(),
            None => "mailersend".to_string(),
        };

        let to = get("MAIL_TO").ok_or(ConfigError::Missing("MAIL_TO"))?;

        let (transport, from) = match transport.as_str() {
            "mailersend" => {
                let api_token =
                    get("MAILERSEND_API_TOKEN").ok_or(ConfigError::Missing("MAILERSEND_API_TOKEN"))?;
                let from = get("MAIL_FROM")
                    .or_else(|| get("MAILERSEND_DOMAIN").map(|d| format!("notifier@{}", d)))
                    .ok_or(ConfigError::Missing("MAIL_FROM"))?;
                (MailTransport::MailerSend { api_token }, from)
            }
            "smtp" => {
                let host = get("SMTP_HOST").ok_or(ConfigError::Missing("SMTP_HOST"))?;
                let port = match get("SMTP_PORT") {
                    Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::Invalid {
                        var: "SMTP_PORT",
                        value: raw.clone(),
                    })?,
                    None => DEFAULT_SMTP_PORT,
                };
                let username = get("SMTP_USER").ok_or(ConfigError::Missing("SMTP_USER"))?;
                let password = get("SMTP_PASSWORD").ok_or(ConfigError::Missing("SMTP_PASSWORD"))?;
                let from = get("MAIL_FROM").unwrap_or_else(|| username.clone());
                (
                    MailTransport::Smtp {
                        host,
                        port,
                        username,
                        password,
                    },
                    from,
                )
            }
            _ => {
                return Err(ConfigError::Invalid {
                    var: "MAIL_TRANSPORT",
                    value: transport.clone(),
                });
            }
        };

        Ok(Self {
            transport,
            from,
            to,
            timeout: Duration::from_secs(NOTIFY_TIMEOUT_SECS),
        })
    }
}
