//! Loads the three source tables from one xlsx workbook.
//!
//! Columns are resolved by header name, so the sheet may carry extra
//! columns or a different column order without affecting the load.

use crate::model::{CalendarEntry, Product, SalesTables, Transaction};
use calamine::{open_workbook, Data, DataType, Range, Reader, Xlsx};
use chrono::NaiveDate;
use salesgraph_common::{ReportError, Result};
use std::io::{Read, Seek};
use std::path::Path;

/// Names of the three logical sheets inside the source workbook
#[derive(Debug, Clone, PartialEq)]
pub struct SheetNames {
    pub transactions: String,
    pub products: String,
    pub calendar: String,
}

impl Default for SheetNames {
    fn default() -> Self {
        Self {
            transactions: "transactions".to_string(),
            products: "products".to_string(),
            calendar: "calendar".to_string(),
        }
    }
}

/// Read the transactions, products and calendar sheets into typed tables,
/// preserving row order. No transformation beyond type conversion happens
/// here.
pub fn load_sales_workbook(path: &Path, sheets: &SheetNames) -> Result<SalesTables> {
    let mut workbook: Xlsx<_> = open_workbook(path).map_err(|e| {
        ReportError::source_with_source(
            format!("failed to open sales workbook {}", path.display()),
            e,
        )
    })?;

    let transactions = load_transactions(&mut workbook, &sheets.transactions)?;
    let products = load_products(&mut workbook, &sheets.products)?;
    let calendar = load_calendar(&mut workbook, &sheets.calendar)?;

    tracing::debug!(
        transactions = transactions.len(),
        products = products.len(),
        calendar = calendar.len(),
        "loaded source tables"
    );

    Ok(SalesTables {
        transactions,
        products,
        calendar,
    })
}

fn load_transactions<R: Read + Seek>(
    workbook: &mut Xlsx<R>,
    sheet: &str,
) -> Result<Vec<Transaction>> {
    let range = sheet_range(workbook, sheet)?;
    let headers = sheet_headers(&range, sheet)?;
    let date_idx = required_column(&headers, sheet, "date")?;
    let product_idx = required_column(&headers, sheet, "product_id")?;
    let quantity_idx = required_column(&headers, sheet, "quantity")?;
    let price_idx = required_column(&headers, sheet, "unit_price")?;

    let mut transactions = Vec::new();
    for (i, row) in range.rows().skip(1).enumerate() {
        if is_empty_row(row) {
            continue;
        }
        let line = i + 2;
        let date = cell_date(row.get(date_idx)).ok_or_else(|| {
            ReportError::invalid_data(sheet, format!("row {line}: unreadable date"))
        })?;
        let product_id = cell_u32(row.get(product_idx)).ok_or_else(|| {
            ReportError::invalid_data(sheet, format!("row {line}: unreadable product_id"))
        })?;
        transactions.push(Transaction {
            date,
            product_id,
            quantity: cell_f64(row.get(quantity_idx)),
            unit_price: cell_f64(row.get(price_idx)),
        });
    }
    Ok(transactions)
}

fn load_products<R: Read + Seek>(workbook: &mut Xlsx<R>, sheet: &str) -> Result<Vec<Product>> {
    let range = sheet_range(workbook, sheet)?;
    let headers = sheet_headers(&range, sheet)?;
    let product_idx = required_column(&headers, sheet, "product_id")?;
    let name_idx = required_column(&headers, sheet, "product_name")?;
    let category_idx = column_index(&headers, "category");

    let mut products = Vec::new();
    for (i, row) in range.rows().skip(1).enumerate() {
        if is_empty_row(row) {
            continue;
        }
        let line = i + 2;
        let product_id = cell_u32(row.get(product_idx)).ok_or_else(|| {
            ReportError::invalid_data(sheet, format!("row {line}: unreadable product_id"))
        })?;
        let name = cell_string(row.get(name_idx)).ok_or_else(|| {
            ReportError::invalid_data(sheet, format!("row {line}: missing product_name"))
        })?;
        products.push(Product {
            product_id,
            name,
            category: category_idx.and_then(|idx| cell_string(row.get(idx))),
        });
    }
    Ok(products)
}

fn load_calendar<R: Read + Seek>(
    workbook: &mut Xlsx<R>,
    sheet: &str,
) -> Result<Vec<CalendarEntry>> {
    let range = sheet_range(workbook, sheet)?;
    let headers = sheet_headers(&range, sheet)?;
    let date_idx = required_column(&headers, sheet, "date")?;
    let weekday_idx = column_index(&headers, "weekday");
    let month_idx = column_index(&headers, "month");

    let mut calendar = Vec::new();
    for (i, row) in range.rows().skip(1).enumerate() {
        if is_empty_row(row) {
            continue;
        }
        let line = i + 2;
        let date = cell_date(row.get(date_idx)).ok_or_else(|| {
            ReportError::invalid_data(sheet, format!("row {line}: unreadable date"))
        })?;
        calendar.push(CalendarEntry {
            date,
            weekday: weekday_idx.and_then(|idx| cell_string(row.get(idx))),
            month: month_idx.and_then(|idx| cell_string(row.get(idx))),
        });
    }
    Ok(calendar)
}

fn sheet_range<R: Read + Seek>(workbook: &mut Xlsx<R>, name: &str) -> Result<Range<Data>> {
    workbook
        .worksheet_range(name)
        .map_err(|_| ReportError::sheet_missing(name))
}

fn sheet_headers(range: &Range<Data>, sheet: &str) -> Result<Vec<String>> {
    range
        .headers()
        .ok_or_else(|| ReportError::invalid_data(sheet, "missing header row"))
}

fn column_index(headers: &[String], name: &str) -> Option<usize> {
    headers.iter().position(|h| h.trim().eq_ignore_ascii_case(name))
}

fn required_column(headers: &[String], sheet: &str, name: &str) -> Result<usize> {
    column_index(headers, name).ok_or_else(|| {
        ReportError::invalid_data(sheet, format!("missing required column '{name}'"))
    })
}

fn is_empty_row(row: &[Data]) -> bool {
    row.iter().all(|c| matches!(c, Data::Empty))
}

fn cell_f64(cell: Option<&Data>) -> Option<f64> {
    match cell? {
        Data::Float(f) => Some(*f),
        Data::Int(i) => Some(*i as f64),
        Data::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn cell_u32(cell: Option<&Data>) -> Option<u32> {
    cell_f64(cell).and_then(|f| {
        if f.fract() == 0.0 && (0.0..=u32::MAX as f64).contains(&f) {
            Some(f as u32)
        } else {
            None
        }
    })
}

fn cell_string(cell: Option<&Data>) -> Option<String> {
    match cell? {
        Data::Empty => None,
        other => {
            let s = other.as_string()?;
            let s = s.trim();
            if s.is_empty() {
                None
            } else {
                Some(s.to_string())
            }
        }
    }
}

/// Dates arrive either as native datetime cells or as `YYYY-MM-DD` text.
fn cell_date(cell: Option<&Data>) -> Option<NaiveDate> {
    let cell = cell?;
    if let Some(date) = cell.as_date() {
        return Some(date);
    }
    match cell {
        Data::String(s) => NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_f64_accepts_numeric_text() {
        assert_eq!(cell_f64(Some(&Data::Float(2.5))), Some(2.5));
        assert_eq!(cell_f64(Some(&Data::Int(3))), Some(3.0));
        assert_eq!(cell_f64(Some(&Data::String(" 4.25 ".to_string()))), Some(4.25));
        assert_eq!(cell_f64(Some(&Data::Empty)), None);
        assert_eq!(cell_f64(None), None);
    }

    #[test]
    fn test_cell_u32_rejects_fractions_and_negatives() {
        assert_eq!(cell_u32(Some(&Data::Int(7))), Some(7));
        assert_eq!(cell_u32(Some(&Data::Float(7.5))), None);
        assert_eq!(cell_u32(Some(&Data::Int(-1))), None);
    }

    #[test]
    fn test_cell_date_parses_iso_strings() {
        let cell = Data::String("2024-01-01".to_string());
        assert_eq!(
            cell_date(Some(&cell)),
            NaiveDate::from_ymd_opt(2024, 1, 1)
        );
        assert_eq!(cell_date(Some(&Data::String("01/02/2024".to_string()))), None);
    }

    #[test]
    fn test_column_index_is_trimmed_and_case_insensitive() {
        let headers = vec![" Date ".to_string(), "PRODUCT_ID".to_string()];
        assert_eq!(column_index(&headers, "date"), Some(0));
        assert_eq!(column_index(&headers, "product_id"), Some(1));
        assert_eq!(column_index(&headers, "quantity"), None);
    }

    #[test]
    fn test_empty_row_detection() {
        assert!(is_empty_row(&[Data::Empty, Data::Empty]));
        assert!(!is_empty_row(&[Data::Empty, Data::Int(1)]));
    }
}
