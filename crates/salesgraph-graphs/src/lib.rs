//! Chart rendering for sales summaries.
//!
//! One module per chart, drawn natively with plotters' bitmap backend.

pub mod product_share;
pub mod product_totals;
pub mod renderer;
pub mod types;

pub use product_share::ProductShareChart;
pub use product_totals::ProductTotalsChart;
pub use renderer::ChartRenderer;
pub use types::*;
