use crate::model::DealRecord;
use crate::utils::format_payment;
use tracing::info;

/// Trait defining the interface for a deal analyzer.
pub trait Analyzer {
    fn find_deals(&self, deals: &[DealRecord]) -> Vec<DealRecord>;
}

/// Keeps leases at or under a monthly ceiling.
pub struct DealAnalyzer {
    pub max_lease_payment: f64,
}

impl DealAnalyzer {
    pub fn new(max_lease_payment: f64) -> Self {
        Self { max_lease_payment }
    }

    pub fn is_match(&self, deal: &DealRecord) -> bool {
        deal.lease_payment <= self.max_lease_payment
    }
}

impl Analyzer for DealAnalyzer {
    /// Order of the input is preserved.
    fn find_deals(&self, deals: &[DealRecord]) -> Vec<DealRecord> {
        deals
            .iter()
            .filter(|deal| self.is_match(deal))
            .inspect(|deal| {
                info!(
                    "   >>> MATCH! {} (VIN: {}) {} <= {}",
                    deal.year,
                    deal.vin,
                    format_payment(deal.lease_payment),
                    format_payment(self.max_lease_payment)
                );
            })
            .cloned()
            .collect()
    }
}
