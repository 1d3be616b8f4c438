use crate::model::ScraperError;
use crate::scraper::SearchQuery;
use serde_json::Value;

#[async_trait::async_trait]
pub trait Scraper: Send + Sync {
    async fn fetch(&self, query: &SearchQuery) -> Result<Value, ScraperError>;
}
