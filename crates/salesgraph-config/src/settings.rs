//! Application configuration structures

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Source workbook and sheet names
    pub input: InputSettings,

    /// Summary workbook destination
    pub output: OutputSettings,

    /// Chart rendering destinations and dimensions
    pub charts: ChartSettings,
}

/// Source workbook configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct InputSettings {
    /// Path of the sales export workbook
    pub workbook: PathBuf,

    /// Sheet holding one row per sale
    pub transactions_sheet: String,

    /// Sheet holding the product catalog
    pub products_sheet: String,

    /// Sheet holding the calendar attributes
    pub calendar_sheet: String,
}

impl Default for InputSettings {
    fn default() -> Self {
        Self {
            workbook: PathBuf::from("data/daily_sales.xlsx"),
            transactions_sheet: "transactions".to_string(),
            products_sheet: "products".to_string(),
            calendar_sheet: "calendar".to_string(),
        }
    }
}

/// Summary workbook configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputSettings {
    /// Path of the four-sheet summary workbook
    pub workbook: PathBuf,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            workbook: PathBuf::from("results/sales_summary.xlsx"),
        }
    }
}

/// Chart output configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ChartSettings {
    /// Directory the chart images are written into
    pub directory: PathBuf,

    /// File name of the per-product bar chart
    pub bar_file: String,

    /// File name of the per-product share pie chart
    pub pie_file: String,

    /// Image width in pixels
    pub width: u32,

    /// Image height in pixels
    pub height: u32,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("charts"),
            bar_file: "sales_by_product_bar.png".to_string(),
            pie_file: "sales_by_product_pie.png".to_string(),
            width: 800,
            height: 600,
        }
    }
}

impl ChartSettings {
    /// Full path of the bar chart image
    pub fn bar_path(&self) -> PathBuf {
        self.directory.join(&self.bar_file)
    }

    /// Full path of the pie chart image
    pub fn pie_path(&self) -> PathBuf {
        self.directory.join(&self.pie_file)
    }
}

impl Settings {
    /// Resolve paths relative to the given base directory.
    ///
    /// Used by tests and embedders that run against a scratch directory.
    pub fn rebased(mut self, base: &Path) -> Self {
        self.input.workbook = base.join(&self.input.workbook);
        self.output.workbook = base.join(&self.output.workbook);
        self.charts.directory = base.join(&self.charts.directory);
        self
    }
}
