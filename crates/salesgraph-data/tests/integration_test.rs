//! Integration tests for the salesgraph-data crate.
//!
//! These build a small sales workbook on disk, run the loader and the
//! exporter against it, and verify the files through independent reads.

use calamine::{open_workbook, Data, DataType, Reader, Xlsx};
use chrono::NaiveDate;
use rust_xlsxwriter::Workbook;
use salesgraph_common::ReportError;
use salesgraph_data::{
    join_sales, load_sales_workbook, select_top, summarize_by_date, summarize_by_product,
    write_summary_workbook, SheetNames,
};
use std::path::Path;

/// Write the worked example workbook: two products, two sales on one day.
fn write_fixture_workbook(path: &Path) {
    let mut workbook = Workbook::new();

    let sheet = workbook.add_worksheet();
    sheet.set_name("transactions").unwrap();
    for (col, header) in ["date", "product_id", "quantity", "unit_price"]
        .iter()
        .enumerate()
    {
        sheet.write_string(0, col as u16, *header).unwrap();
    }
    sheet.write_string(1, 0, "2024-01-01").unwrap();
    sheet.write_number(1, 1, 1.0).unwrap();
    sheet.write_number(1, 2, 3.0).unwrap();
    sheet.write_number(1, 3, 10.0).unwrap();
    sheet.write_string(2, 0, "2024-01-01").unwrap();
    sheet.write_number(2, 1, 2.0).unwrap();
    sheet.write_number(2, 2, 1.0).unwrap();
    sheet.write_number(2, 3, 50.0).unwrap();

    let sheet = workbook.add_worksheet();
    sheet.set_name("products").unwrap();
    for (col, header) in ["product_id", "product_name", "category"].iter().enumerate() {
        sheet.write_string(0, col as u16, *header).unwrap();
    }
    sheet.write_number(1, 0, 1.0).unwrap();
    sheet.write_string(1, 1, "Widget").unwrap();
    sheet.write_string(1, 2, "Hardware").unwrap();
    sheet.write_number(2, 0, 2.0).unwrap();
    sheet.write_string(2, 1, "Gadget").unwrap();
    sheet.write_string(2, 2, "Hardware").unwrap();

    let sheet = workbook.add_worksheet();
    sheet.set_name("calendar").unwrap();
    for (col, header) in ["date", "weekday", "month"].iter().enumerate() {
        sheet.write_string(0, col as u16, *header).unwrap();
    }
    sheet.write_string(1, 0, "2024-01-01").unwrap();
    sheet.write_string(1, 1, "Monday").unwrap();
    sheet.write_string(1, 2, "January").unwrap();

    workbook.save(path).unwrap();
}

#[test]
fn test_loader_reads_typed_tables() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("daily_sales.xlsx");
    write_fixture_workbook(&input);

    let tables = load_sales_workbook(&input, &SheetNames::default()).unwrap();

    assert_eq!(tables.transactions.len(), 2);
    assert_eq!(tables.products.len(), 2);
    assert_eq!(tables.calendar.len(), 1);

    let first = &tables.transactions[0];
    assert_eq!(first.date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    assert_eq!(first.product_id, 1);
    assert_eq!(first.quantity, Some(3.0));
    assert_eq!(first.unit_price, Some(10.0));

    assert_eq!(tables.products[1].name, "Gadget");
    assert_eq!(tables.products[1].category.as_deref(), Some("Hardware"));
    assert_eq!(tables.calendar[0].weekday.as_deref(), Some("Monday"));
}

#[test]
fn test_loader_missing_workbook() {
    let err =
        load_sales_workbook(Path::new("nowhere/daily_sales.xlsx"), &SheetNames::default())
            .unwrap_err();
    assert!(matches!(err, ReportError::Source { .. }));
}

#[test]
fn test_loader_missing_sheet() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("daily_sales.xlsx");
    write_fixture_workbook(&input);

    let sheets = SheetNames {
        calendar: "holidays".to_string(),
        ..SheetNames::default()
    };
    let err = load_sales_workbook(&input, &sheets).unwrap_err();
    assert!(matches!(err, ReportError::SheetMissing { ref sheet } if sheet == "holidays"));
}

#[test]
fn test_loader_missing_column() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("daily_sales.xlsx");

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("transactions").unwrap();
    sheet.write_string(0, 0, "date").unwrap();
    sheet.write_string(0, 1, "product_id").unwrap();
    // quantity and unit_price headers are absent
    workbook.save(&input).unwrap();

    let err = load_sales_workbook(&input, &SheetNames::default()).unwrap_err();
    assert!(matches!(err, ReportError::InvalidData { .. }));
    assert!(err.to_string().contains("quantity"));
}

#[test]
fn test_export_produces_four_named_sheets() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("daily_sales.xlsx");
    let output = dir.path().join("sales_summary.xlsx");
    write_fixture_workbook(&input);

    let tables = load_sales_workbook(&input, &SheetNames::default()).unwrap();
    let records = join_sales(&tables.transactions, &tables.products, &tables.calendar);
    let by_product = summarize_by_product(&records);
    let by_date = summarize_by_date(&records);
    let top = select_top(&by_product).unwrap();

    write_summary_workbook(&output, &records, &by_product, &by_date, &top).unwrap();

    let mut written: Xlsx<_> = open_workbook(&output).unwrap();
    assert_eq!(
        written.sheet_names().to_vec(),
        vec![
            "Full Joined Set".to_string(),
            "Product Summary".to_string(),
            "Date Summary".to_string(),
            "Top Product".to_string(),
        ]
    );

    // Joined sheet keeps one row per transaction plus the header
    let joined = written.worksheet_range("Full Joined Set").unwrap();
    assert_eq!(joined.rows().count(), 3);
    let headers = joined.headers().unwrap();
    assert_eq!(headers[0], "date");
    assert_eq!(headers[8], "total_value");

    // The worked example: Widget 30.0, Gadget 50.0, top is Gadget
    let product_rows: Vec<(String, f64)> = written
        .worksheet_range("Product Summary")
        .unwrap()
        .rows()
        .skip(1)
        .map(|r| (r[0].as_string().unwrap(), r[1].as_f64().unwrap()))
        .collect();
    assert_eq!(
        product_rows,
        vec![("Widget".to_string(), 30.0), ("Gadget".to_string(), 50.0)]
    );

    let top_row = written.worksheet_range("Top Product").unwrap();
    let top_cells: Vec<&Data> = top_row.rows().nth(1).unwrap().iter().collect();
    assert_eq!(top_cells[0].as_string().as_deref(), Some("Gadget"));
    assert_eq!(top_cells[1].as_f64(), Some(50.0));
}

#[test]
fn test_export_into_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("missing").join("sales_summary.xlsx");

    let top = salesgraph_data::ProductSummary {
        name: "Widget".to_string(),
        total_value: 30.0,
    };
    let err = write_summary_workbook(&output, &[], &[top.clone()], &[], &top).unwrap_err();
    assert!(matches!(err, ReportError::Destination { .. }));
}

#[test]
fn test_two_runs_produce_identical_tables() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("daily_sales.xlsx");
    write_fixture_workbook(&input);

    let run = || {
        let tables = load_sales_workbook(&input, &SheetNames::default()).unwrap();
        let records = join_sales(&tables.transactions, &tables.products, &tables.calendar);
        let by_product = summarize_by_product(&records);
        let by_date = summarize_by_date(&records);
        let top = select_top(&by_product).unwrap();
        (records, by_product, by_date, top)
    };

    assert_eq!(run(), run());
}
