pub mod finance;
pub mod inventory_parser;

pub use inventory_parser::{InventoryParser, Parser};
