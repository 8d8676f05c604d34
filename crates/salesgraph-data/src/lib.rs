//! Tabular sales pipeline: load, join, derive, summarize, export.
//!
//! Every stage takes the previous stage's output as an explicit parameter
//! and returns a new value; nothing is shared or mutated across stages.

pub mod join;
pub mod loader;
pub mod model;
pub mod summary;
pub mod workbook;

pub use join::{join_sales, join_tables, total_value};
pub use loader::{load_sales_workbook, SheetNames};
pub use model::*;
pub use summary::{select_top, summarize_by_date, summarize_by_product};
pub use workbook::{
    write_summary_workbook, DATE_SHEET, JOINED_SHEET, PRODUCT_SHEET, TOP_SHEET,
};
