use crate::config::InventoryConfig;
use crate::model::ScraperError;
use crate::scraper::{InventoryRequest, Scraper, SearchQuery};

use reqwest::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, REFERER};
use serde_json::Value;
use tracing::{info, warn};

pub struct ScraperImpl {
    client: Client,
    endpoint: String,
}

impl ScraperImpl {
    pub fn new(cfg: &InventoryConfig) -> Result<Self, ScraperError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json, text/plain, */*"));
        let referer = HeaderValue::from_str(&cfg.referer)
            .map_err(|e| ScraperError::HttpError(format!("invalid referer: {}", e)))?;
        headers.insert(REFERER, referer);

        let client = Client::builder()
            .user_agent(cfg.user_agent.as_str())
            .default_headers(headers)
            .timeout(cfg.timeout)
            .build()
            .map_err(|e| ScraperError::HttpError(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: cfg.endpoint.clone(),
        })
    }
}

fn classify(e: reqwest::Error) -> ScraperError {
    if e.is_timeout() {
        ScraperError::Timeout
    } else {
        ScraperError::HttpError(e.to_string())
    }
}

#[async_trait::async_trait]
impl Scraper for ScraperImpl {
    async fn fetch(&self, query: &SearchQuery) -> Result<Value, ScraperError> {
        let payload = InventoryRequest::first_page(query).to_json()?;

        info!("Fetching inventory from {}", self.endpoint);
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("query", payload)])
            .send()
            .await
            .map_err(|e| {
                warn!("Inventory request failed: {}", e);
                classify(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!("Inventory endpoint responded [{}]", status);
            return Err(ScraperError::HttpStatus(status.as_u16()));
        }

        response.json::<Value>().await.map_err(|e| {
            warn!("Failed to decode inventory response: {}", e);
            if e.is_timeout() {
                ScraperError::Timeout
            } else {
                ScraperError::Decode(e.to_string())
            }
        })
    }
}
