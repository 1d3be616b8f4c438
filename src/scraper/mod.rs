pub mod fetcher;
pub mod query;
pub mod traits;

pub use fetcher::ScraperImpl;
pub use query::{InventoryRequest, SearchQuery};
pub use traits::Scraper;
