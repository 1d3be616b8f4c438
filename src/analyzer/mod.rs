// Analyzer module: threshold filtering of resolved deals.

pub mod deal_filter;

pub use deal_filter::{Analyzer, DealAnalyzer};
