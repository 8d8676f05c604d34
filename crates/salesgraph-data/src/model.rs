//! Typed records for the sales pipeline

use chrono::NaiveDate;

/// One sale as exported, immutable once loaded.
///
/// `quantity` and `unit_price` are optional because exported cells can be
/// blank; a blank factor makes the derived total blank as well.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub date: NaiveDate,
    pub product_id: u32,
    pub quantity: Option<f64>,
    pub unit_price: Option<f64>,
}

/// Catalog row, unique per `product_id`.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub product_id: u32,
    pub name: String,
    pub category: Option<String>,
}

/// Calendar attributes, unique per `date`.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarEntry {
    pub date: NaiveDate,
    pub weekday: Option<String>,
    pub month: Option<String>,
}

/// The three source tables, in their loaded row order.
#[derive(Debug, Clone, PartialEq)]
pub struct SalesTables {
    pub transactions: Vec<Transaction>,
    pub products: Vec<Product>,
    pub calendar: Vec<CalendarEntry>,
}

/// A transaction enriched with its product and calendar attributes.
///
/// Exactly one record exists per input transaction; an unmatched join
/// leaves the corresponding descriptive fields `None`. `total_value` is
/// derived once, right after the join, and never changed again.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedRecord {
    pub date: NaiveDate,
    pub product_id: u32,
    pub quantity: Option<f64>,
    pub unit_price: Option<f64>,
    pub name: Option<String>,
    pub category: Option<String>,
    pub weekday: Option<String>,
    pub month: Option<String>,
    pub total_value: Option<f64>,
}

/// Summed totals for one product name.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductSummary {
    pub name: String,
    pub total_value: f64,
}

/// Summed totals for one date.
#[derive(Debug, Clone, PartialEq)]
pub struct DateSummary {
    pub date: NaiveDate,
    pub total_value: f64,
}
