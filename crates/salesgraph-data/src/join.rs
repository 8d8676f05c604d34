//! Left joins of transactions against products and calendar, plus the
//! derived per-record total.

use crate::model::{CalendarEntry, EnrichedRecord, Product, SalesTables, Transaction};
use chrono::NaiveDate;
use std::collections::HashMap;

/// `quantity × unit_price`, or `None` when either factor is blank.
pub fn total_value(quantity: Option<f64>, unit_price: Option<f64>) -> Option<f64> {
    match (quantity, unit_price) {
        (Some(q), Some(p)) => Some(q * p),
        _ => None,
    }
}

/// Left-join transactions to products on `product_id`, then to calendar on
/// `date`, deriving `total_value` in the same pass.
///
/// Produces exactly one record per input transaction, in input order.
/// Unmatched keys leave the descriptive fields `None`. Right-side keys are
/// assumed unique; a duplicate silently keeps its last occurrence.
pub fn join_sales(
    transactions: &[Transaction],
    products: &[Product],
    calendar: &[CalendarEntry],
) -> Vec<EnrichedRecord> {
    let by_product_id: HashMap<u32, &Product> =
        products.iter().map(|p| (p.product_id, p)).collect();
    let by_date: HashMap<NaiveDate, &CalendarEntry> =
        calendar.iter().map(|c| (c.date, c)).collect();

    transactions
        .iter()
        .map(|t| {
            let product = by_product_id.get(&t.product_id);
            let day = by_date.get(&t.date);
            EnrichedRecord {
                date: t.date,
                product_id: t.product_id,
                quantity: t.quantity,
                unit_price: t.unit_price,
                name: product.map(|p| p.name.clone()),
                category: product.and_then(|p| p.category.clone()),
                weekday: day.and_then(|d| d.weekday.clone()),
                month: day.and_then(|d| d.month.clone()),
                total_value: total_value(t.quantity, t.unit_price),
            }
        })
        .collect()
}

/// Convenience wrapper joining a loaded table set.
pub fn join_tables(tables: &SalesTables) -> Vec<EnrichedRecord> {
    join_sales(&tables.transactions, &tables.products, &tables.calendar)
}
