//! Aggregation over the enriched record set.

use crate::model::{DateSummary, EnrichedRecord, ProductSummary};
use chrono::NaiveDate;
use salesgraph_common::{ReportError, Result};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Group records by product name and sum their totals.
///
/// Output rows appear in order of first appearance, not sorted. Blank
/// totals count as 0. Records whose product join missed carry no name to
/// group under and are skipped.
pub fn summarize_by_product(records: &[EnrichedRecord]) -> Vec<ProductSummary> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut rows: Vec<ProductSummary> = Vec::new();

    for record in records {
        let Some(name) = &record.name else { continue };
        let idx = *index.entry(name.clone()).or_insert_with(|| {
            rows.push(ProductSummary {
                name: name.clone(),
                total_value: 0.0,
            });
            rows.len() - 1
        });
        rows[idx].total_value += record.total_value.unwrap_or(0.0);
    }
    rows
}

/// Group records by transaction date and sum their totals.
///
/// The date comes from the transaction itself, so no record is skipped.
pub fn summarize_by_date(records: &[EnrichedRecord]) -> Vec<DateSummary> {
    let mut index: HashMap<NaiveDate, usize> = HashMap::new();
    let mut rows: Vec<DateSummary> = Vec::new();

    for record in records {
        let idx = *index.entry(record.date).or_insert_with(|| {
            rows.push(DateSummary {
                date: record.date,
                total_value: 0.0,
            });
            rows.len() - 1
        });
        rows[idx].total_value += record.total_value.unwrap_or(0.0);
    }
    rows
}

/// The product summary row with the highest total.
///
/// Stable descending sort, so ties keep the earliest input row.
pub fn select_top(by_product: &[ProductSummary]) -> Result<ProductSummary> {
    let mut sorted = by_product.to_vec();
    sorted.sort_by(|a, b| {
        b.total_value
            .partial_cmp(&a.total_value)
            .unwrap_or(Ordering::Equal)
    });
    sorted
        .into_iter()
        .next()
        .ok_or_else(|| ReportError::empty_input("no product rows to rank"))
}
