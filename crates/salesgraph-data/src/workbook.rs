//! Writes the four-sheet summary workbook.

use crate::model::{DateSummary, EnrichedRecord, ProductSummary};
use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};
use salesgraph_common::{ReportError, Result};
use std::path::Path;

/// Sheet holding every enriched record
pub const JOINED_SHEET: &str = "Full Joined Set";
/// Sheet holding the per-product totals
pub const PRODUCT_SHEET: &str = "Product Summary";
/// Sheet holding the per-date totals
pub const DATE_SHEET: &str = "Date Summary";
/// Sheet holding the single best-selling product
pub const TOP_SHEET: &str = "Top Product";

const JOINED_HEADERS: [&str; 9] = [
    "date",
    "product_id",
    "quantity",
    "unit_price",
    "product_name",
    "category",
    "weekday",
    "month",
    "total_value",
];

/// Write the joined set and the three summaries as four sheets of one
/// workbook. Column order is fixed, blanks stay blank, and no row index
/// column is emitted. The parent directory is not created here; a missing
/// one surfaces as a destination error from the save.
pub fn write_summary_workbook(
    path: &Path,
    records: &[EnrichedRecord],
    by_product: &[ProductSummary],
    by_date: &[DateSummary],
    top: &ProductSummary,
) -> Result<()> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();

    write_joined_sheet(workbook.add_worksheet(), records, &header_format)
        .map_err(|e| destination_error(path, e))?;
    write_product_sheet(workbook.add_worksheet(), PRODUCT_SHEET, by_product, &header_format)
        .map_err(|e| destination_error(path, e))?;
    write_date_sheet(workbook.add_worksheet(), by_date, &header_format)
        .map_err(|e| destination_error(path, e))?;
    write_product_sheet(
        workbook.add_worksheet(),
        TOP_SHEET,
        std::slice::from_ref(top),
        &header_format,
    )
    .map_err(|e| destination_error(path, e))?;

    workbook
        .save(path)
        .map_err(|e| destination_error(path, e))?;

    tracing::debug!(sheets = 4, "wrote summary workbook");
    Ok(())
}

fn destination_error(path: &Path, err: XlsxError) -> ReportError {
    ReportError::destination_with_source(
        format!("failed to write summary workbook {}", path.display()),
        err,
    )
}

fn write_joined_sheet(
    sheet: &mut Worksheet,
    records: &[EnrichedRecord],
    header_format: &Format,
) -> std::result::Result<(), XlsxError> {
    sheet.set_name(JOINED_SHEET)?;
    for (col, name) in JOINED_HEADERS.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *name, header_format)?;
    }

    for (i, record) in records.iter().enumerate() {
        let row = (i + 1) as u32;
        sheet.write_string(row, 0, record.date.to_string())?;
        sheet.write_number(row, 1, f64::from(record.product_id))?;
        if let Some(quantity) = record.quantity {
            sheet.write_number(row, 2, quantity)?;
        }
        if let Some(unit_price) = record.unit_price {
            sheet.write_number(row, 3, unit_price)?;
        }
        if let Some(name) = &record.name {
            sheet.write_string(row, 4, name)?;
        }
        if let Some(category) = &record.category {
            sheet.write_string(row, 5, category)?;
        }
        if let Some(weekday) = &record.weekday {
            sheet.write_string(row, 6, weekday)?;
        }
        if let Some(month) = &record.month {
            sheet.write_string(row, 7, month)?;
        }
        if let Some(total_value) = record.total_value {
            sheet.write_number(row, 8, total_value)?;
        }
    }
    Ok(())
}

fn write_product_sheet(
    sheet: &mut Worksheet,
    name: &str,
    rows: &[ProductSummary],
    header_format: &Format,
) -> std::result::Result<(), XlsxError> {
    sheet.set_name(name)?;
    sheet.write_string_with_format(0, 0, "product_name", header_format)?;
    sheet.write_string_with_format(0, 1, "total_value", header_format)?;
    for (i, summary) in rows.iter().enumerate() {
        let row = (i + 1) as u32;
        sheet.write_string(row, 0, &summary.name)?;
        sheet.write_number(row, 1, summary.total_value)?;
    }
    Ok(())
}

fn write_date_sheet(
    sheet: &mut Worksheet,
    rows: &[DateSummary],
    header_format: &Format,
) -> std::result::Result<(), XlsxError> {
    sheet.set_name(DATE_SHEET)?;
    sheet.write_string_with_format(0, 0, "date", header_format)?;
    sheet.write_string_with_format(0, 1, "total_value", header_format)?;
    for (i, summary) in rows.iter().enumerate() {
        let row = (i + 1) as u32;
        sheet.write_string(row, 0, summary.date.to_string())?;
        sheet.write_number(row, 1, summary.total_value)?;
    }
    Ok(())
}
