mod analyzer;
mod config;
mod model;
mod normalizer;
mod notifier;
mod parser;
mod scraper;
mod utils;

#[cfg(test)]
mod test_support;

use analyzer::{Analyzer, DealAnalyzer};
use config::AppConfig;
use notifier::{EmailNotifier, NotifyOutcome};
use parser::{InventoryParser, Parser};
use scraper::{Scraper, ScraperImpl};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    NoData,
    NoDeals,
    Notified(NotifyOutcome),
}

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Set panic hook to log details about any panic
    std::panic::set_hook(Box::new(|panic_info| {
        error!("😱 Panic occurred: {}", panic_info);
    }));

    let config = AppConfig::from_env();

    let scraper = match ScraperImpl::new(&config.inventory) {
        Ok(s) => s,
        Err(e) => {
            error!("Failed to initialize inventory client: {}", e);
            return;
        }
    };
    let parser = InventoryParser::new();
    let analyzer = DealAnalyzer::new(config.max_lease_payment);
    let notifier = EmailNotifier::from_config(config.mail.as_ref());

    let outcome = run_once(&config, &scraper, &parser, &analyzer, &notifier).await;
    info!("Run finished: {:?}", outcome);
}

/// Fetch, extract, filter, then notify when something matched.
async fn run_once(
    config: &AppConfig,
    scraper: &dyn Scraper,
    parser: &dyn Parser,
    analyzer: &dyn Analyzer,
    notifier: &EmailNotifier,
) -> RunOutcome {
    info!("Fetching Tesla inventory...");
    let data = match scraper.fetch(&config.inventory.query).await {
        Ok(data) => data,
        Err(e) => {
            warn!("Error fetching inventory: {}", e);
            info!("No data received.");
            return RunOutcome::NoData;
        }
    };

    let resolved = parser.parse(&data);
    info!("Resolved lease payments for {} vehicles", resolved.len());

    let deals = analyzer.find_deals(&resolved);
    info!("Found {} cars matching query.", deals.len());
    if deals.is_empty() {
        return RunOutcome::NoDeals;
    }

    RunOutcome::Notified(notifier.notify(&deals).await)
}
