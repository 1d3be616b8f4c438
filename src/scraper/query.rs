// Inventory search payload, serialized with upstream key names
use serde::{Serialize, Serializer};
use std::collections::BTreeSet;

/// Inclusive range sent upstream as `"min,max"`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    pub min: u32,
    pub max: u32,
}

impl Serialize for Range {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&format_args!("{},{}", self.min, self.max))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryOptions {
    #[serde(rename = "Year")]
    pub years: BTreeSet<u16>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchQuery {
    pub model: String,
    pub condition: String,
    pub options: QueryOptions,
    #[serde(rename = "arrangeby")]
    pub arrange_by: String,
    pub order: String,
    pub market: String,
    pub language: String,
    pub super_region: String,
    #[serde(rename = "PaymentType")]
    pub payment_type: String,
    #[serde(rename = "paymentRange")]
    pub payment_range: Range,
    #[serde(rename = "Odometer")]
    pub odometer: Range,
    pub lng: f64,
    pub lat: f64,
    pub zip: String,
    pub range: u32,
    pub region: String,
}

impl Default for SearchQuery {
    /// Used Model 3 leases around Long Beach, CA, cheapest first.
    fn default() -> Self {
        Self {
            model: "m3".into(),
            condition: "used".into(),
            options: QueryOptions {
                years: (2017..=2025).collect(),
            },
            arrange_by: "Price".into(),
            order: "asc".into(),
            market: "US".into(),
            language: "en".into(),
            super_region: "north america".into(),
            payment_type: "lease".into(),
            // wider than the lease threshold; matches are filtered locally
            payment_range: Range { min: 0, max: 200 },
            odometer: Range { min: 0, max: 97_000 },
            lng: -118.1215,
            lat: 33.7903,
            zip: "90815".into(),
            range: 200,
            region: "CA".into(),
        }
    }
}

/// Paging envelope wrapped around the query.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryRequest<'a> {
    pub query: &'a SearchQuery,
    pub offset: u32,
    pub count: u32,
    pub outside_offset: u32,
    pub outside_search: bool,
    pub is_falcon_delivery_selection_enabled: bool,
    pub version: Option<String>,
}

impl<'a> InventoryRequest<'a> {
    pub fn first_page(query: &'a SearchQuery) -> Self {
        Self {
            query,
            offset: 0,
            count: 50,
            outside_offset: 0,
            outside_search: true,
            is_falcon_delivery_selection_enabled: false,
            version: None,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
