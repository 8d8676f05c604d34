//! The sequential report pipeline.
//!
//! Load, join, summarize, rank, export, render. Each stage consumes the
//! previous stage's return value; the first error aborts the run. The
//! workbook write and the two chart renders are independent side effects,
//! so outputs already written stay on disk when a later stage fails.

use salesgraph_common::Result;
use salesgraph_config::Settings;
use salesgraph_data::{
    join_tables, load_sales_workbook, select_top, summarize_by_date, summarize_by_product,
    write_summary_workbook, SheetNames,
};
use salesgraph_graphs::{ChartRenderer, ProductShareChart, ProductTotalsChart, TotalDataPoint};
use tracing::info;

/// Run the whole report once with the given settings.
pub fn run(settings: &Settings) -> Result<()> {
    let sheets = SheetNames {
        transactions: settings.input.transactions_sheet.clone(),
        products: settings.input.products_sheet.clone(),
        calendar: settings.input.calendar_sheet.clone(),
    };
    let tables = load_sales_workbook(&settings.input.workbook, &sheets)?;
    info!(
        transactions = tables.transactions.len(),
        products = tables.products.len(),
        calendar = tables.calendar.len(),
        "Loaded {}",
        settings.input.workbook.display()
    );

    let records = join_tables(&tables);
    let by_product = summarize_by_product(&records);
    let by_date = summarize_by_date(&records);
    let top = select_top(&by_product)?;
    info!(
        product = %top.name,
        total = top.total_value,
        "Selected top product"
    );

    write_summary_workbook(
        &settings.output.workbook,
        &records,
        &by_product,
        &by_date,
        &top,
    )?;
    info!("Wrote summary workbook to {}", settings.output.workbook.display());

    let chart_data: Vec<TotalDataPoint> = by_product
        .iter()
        .map(|p| TotalDataPoint {
            name: p.name.clone(),
            total: p.total_value,
        })
        .collect();

    let (mut bar, mut bar_config) = ProductTotalsChart::with_config(
        "Total Sold by Product",
        Some("Product"),
        Some("Total Value"),
    );
    bar_config.width = settings.charts.width;
    bar_config.height = settings.charts.height;
    bar.set_data(chart_data.clone());
    bar.render_to_file(&bar_config, &settings.charts.bar_path())?;

    let (mut pie, mut pie_config) = ProductShareChart::with_config("Sales Share by Product");
    pie_config.width = settings.charts.width;
    pie_config.height = settings.charts.height;
    pie.set_data(chart_data);
    pie.render_to_file(&pie_config, &settings.charts.pie_path())?;

    info!("Rendered charts into {}", settings.charts.directory.display());
    Ok(())
}
