// Inventory JSON -> DealRecord
use crate::model::{DealRecord, VehicleListing};
use crate::normalizer::{display_or_placeholder, to_f64};
use crate::parser::finance::resolve_lease_payment;
use crate::utils::{format_payment, order_link};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info, warn};

pub trait Parser {
    /// Every listing with a resolvable lease payment, in response order.
    fn parse(&self, data: &Value) -> Vec<DealRecord>;
}

pub struct InventoryParser;

impl InventoryParser {
    pub fn new() -> Self {
        Self
    }

    /// The `results` array, or nothing when the field is absent or not an array.
    pub fn listings(data: &Value) -> Vec<VehicleListing> {
        let Some(results) = data.get("results").and_then(Value::as_array) else {
            info!("No results found in response.");
            return Vec::new();
        };

        info!("Analyzing {} vehicles...", results.len());
        results
            .iter()
            .enumerate()
            .filter_map(|(idx, raw)| match VehicleListing::deserialize(raw) {
                Ok(listing) => Some(listing),
                Err(e) => {
                    warn!("Skipping unreadable listing #{}: {}", idx, e);
                    None
                }
            })
            .collect()
    }

    pub fn to_deal(listing: &VehicleListing) -> Option<DealRecord> {
        let vin = display_or_placeholder(listing.vin.as_ref());
        let year = display_or_placeholder(listing.year.as_ref());

        let Some(lease_payment) = listing.finplat_details.as_ref().and_then(resolve_lease_payment)
        else {
            debug!("{} M3 (VIN: {}): lease price not found", year, vin);
            return None;
        };

        let price = listing
            .price
            .as_ref()
            .and_then(to_f64)
            .or_else(|| listing.inventory_price.as_ref().and_then(to_f64))
            .unwrap_or(0.0);

        info!(" - {} M3 (VIN: {}): ${}/mo (Lease)", year, vin, format_payment(lease_payment));

        Some(DealRecord {
            link: order_link(&vin),
            vin,
            year,
            price,
            lease_payment,
        })
    }
}

impl Parser for InventoryParser {
    fn parse(&self, data: &Value) -> Vec<DealRecord> {
        Self::listings(data).iter().filter_map(Self::to_deal).collect()
    }
}
