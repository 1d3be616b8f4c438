// Core structs: VehicleListing, DealRecord, error types
use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;

/// Finance products keyed by upstream product id, in response order.
pub type FinanceDetails = Map<String, Value>;

/// One element of the upstream `results` array.
///
/// Scalar fields stay as raw JSON because upstream mixes numbers and strings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VehicleListing {
    #[serde(rename = "VIN", default)]
    pub vin: Option<Value>,
    #[serde(rename = "Year", default)]
    pub year: Option<Value>,
    #[serde(rename = "Price", default)]
    pub price: Option<Value>,
    #[serde(rename = "InventoryPrice", default)]
    pub inventory_price: Option<Value>,
    #[serde(rename = "FinplatDetails", default)]
    pub finplat_details: Option<FinanceDetails>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DealRecord {
    pub vin: String,
    pub year: String,
    pub price: f64,
    pub lease_payment: f64,
    pub link: String,
}

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("failed to encode inventory query: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("HTTP error: {0}")]
    HttpError(String),
    #[error("unexpected HTTP status {0}")]
    HttpStatus(u16),
    #[error("request timed out")]
    Timeout,
    #[error("malformed response body: {0}")]
    Decode(String),
}

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("API error: {0}")]
    ApiError(String),
    #[error("invalid message: {0}")]
    Build(String),
    #[error("SMTP error: {0}")]
    Smtp(String),
    #[error("mail service unreachable")]
    Unreachable,
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("missing required config: {0}")]
    Missing(&'static str),
    #[error("invalid value {value:?} for {var}")]
    Invalid { var: &'static str, value: String },
}
