//! Per-product share pie chart

use crate::{ChartConfig, ChartRenderer, TotalDataPoint};
use plotters::prelude::*;
use salesgraph_common::{ReportError, Result};
use std::path::Path;

/// Pie chart of each product's share of the grand total, one wedge per
/// row, labeled with the product name and its percentage to one decimal.
#[derive(Debug, Default)]
pub struct ProductShareChart {
    pub data: Vec<TotalDataPoint>,
}

impl ProductShareChart {
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Create a chart together with a config carrying the title
    pub fn with_config(title: &str) -> (Self, ChartConfig) {
        let chart = Self::new();
        let config = ChartConfig {
            title: title.to_string(),
            ..Default::default()
        };
        (chart, config)
    }

    pub fn set_data(&mut self, data: Vec<TotalDataPoint>) {
        self.data = data;
    }

    fn grand_total(&self) -> f64 {
        self.data.iter().map(|d| d.total).sum()
    }
}

impl ChartRenderer for ProductShareChart {
    fn render_to_file(&self, config: &ChartConfig, path: &Path) -> Result<()> {
        if self.data.is_empty() {
            return Err(ReportError::chart("no product shares to render"));
        }
        let total = self.grand_total();
        if total <= 0.0 {
            return Err(ReportError::chart("product totals sum to zero"));
        }
        crate::renderer::check_target_dir(path)?;

        let root = BitMapBackend::new(path, (config.width, config.height)).into_drawing_area();
        root.fill(&self.background_color(config))?;

        let title_font = (
            config.style.title_font.family.as_str(),
            config.style.title_font.size,
        );
        root.titled(&config.title, title_font)?;

        let center = (
            (config.width / 2) as i32,
            (config.height / 2) as i32,
        );
        let radius = f64::from(config.width.min(config.height)) * 0.35;
        let sizes: Vec<f64> = self.data.iter().map(|d| d.total).collect();
        let labels: Vec<String> = self.data.iter().map(|d| d.name.clone()).collect();
        let palette = self.colors_for(&config.style.color_scheme);
        let colors: Vec<RGBColor> = (0..self.data.len())
            .map(|i| palette[i % palette.len()])
            .collect();

        let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
        pie.start_angle(-90.0);
        pie.label_style(
            (
                config.style.label_font.family.as_str(),
                config.style.label_font.size,
            )
                .into_font()
                .color(&BLACK),
        );
        pie.percentages(
            (
                config.style.label_font.family.as_str(),
                config.style.label_font.size,
            )
                .into_font()
                .color(&BLACK),
        );
        root.draw(&pie)?;

        root.present().map_err(|e| {
            ReportError::chart_with_source(
                format!("failed to write chart image {}", path.display()),
                e,
            )
        })?;
        tracing::info!("Rendered product share chart to {}", path.display());
        Ok(())
    }
}
