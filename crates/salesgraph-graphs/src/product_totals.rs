//! Per-product totals bar chart

use crate::{ChartConfig, ChartRenderer, TotalDataPoint};
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use salesgraph_common::{ReportError, Result};
use std::path::Path;

/// Vertical bar chart of summed totals per product, one bar per row,
/// each bar annotated with its integer-truncated total.
#[derive(Debug, Default)]
pub struct ProductTotalsChart {
    pub data: Vec<TotalDataPoint>,
}

impl ProductTotalsChart {
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Create a chart together with a config carrying title and axis labels
    pub fn with_config(
        title: &str,
        x_label: Option<&str>,
        y_label: Option<&str>,
    ) -> (Self, ChartConfig) {
        let chart = Self::new();
        let config = ChartConfig {
            title: title.to_string(),
            x_label: x_label.map(|s| s.to_string()),
            y_label: y_label.map(|s| s.to_string()),
            ..Default::default()
        };
        (chart, config)
    }

    pub fn set_data(&mut self, data: Vec<TotalDataPoint>) {
        self.data = data;
    }

    /// Max total for y-axis scaling, with 10% headroom for the labels
    fn max_total(&self) -> f64 {
        if self.data.is_empty() {
            return 10.0;
        }
        self.data.iter().map(|d| d.total).fold(0.0, f64::max) * 1.1
    }
}

impl ChartRenderer for ProductTotalsChart {
    fn render_to_file(&self, config: &ChartConfig, path: &Path) -> Result<()> {
        if self.data.is_empty() {
            return Err(ReportError::chart("no product totals to render"));
        }
        crate::renderer::check_target_dir(path)?;

        let root = BitMapBackend::new(path, (config.width, config.height)).into_drawing_area();
        root.fill(&self.background_color(config))?;

        let max_total = self.max_total();
        let count = self.data.len();

        let title_font = (
            config.style.title_font.family.as_str(),
            config.style.title_font.size,
        );
        let mut chart = ChartBuilder::on(&root)
            .caption(&config.title, title_font)
            .margin(config.style.margins.top)
            .x_label_area_size(config.style.margins.bottom)
            .y_label_area_size(config.style.margins.left)
            .build_cartesian_2d(-0.5f64..(count as f64 - 0.5), 0f64..max_total)?;

        chart
            .configure_mesh()
            .x_desc(config.x_label.as_deref().unwrap_or("Product"))
            .y_desc(config.y_label.as_deref().unwrap_or("Total Value"))
            .x_labels(count)
            .x_label_formatter(&|x: &f64| {
                // Product names sit under the bar centers at integer ticks
                let idx = x.round();
                if idx < 0.0 || (*x - idx).abs() > 0.25 {
                    return String::new();
                }
                match self.data.get(idx as usize) {
                    Some(point) => point.name.clone(),
                    None => String::new(),
                }
            })
            .disable_x_mesh()
            .draw()?;

        let colors = self.colors_for(&config.style.color_scheme);
        let label_style = (
            config.style.label_font.family.as_str(),
            config.style.label_font.size,
        )
            .into_font()
            .color(&BLACK)
            .pos(Pos::new(HPos::Center, VPos::Bottom));

        for (i, point) in self.data.iter().enumerate() {
            let color = colors[i % colors.len()];
            let center = i as f64;
            chart.draw_series(std::iter::once(Rectangle::new(
                [(center - 0.35, 0.0), (center + 0.35, point.total)],
                color.filled(),
            )))?;

            chart.draw_series(std::iter::once(Text::new(
                format!("{}", point.total.trunc() as i64),
                (center, point.total + max_total * 0.01),
                label_style.clone(),
            )))?;
        }

        root.present().map_err(|e| {
            ReportError::chart_with_source(
                format!("failed to write chart image {}", path.display()),
                e,
            )
        })?;
        tracing::info!("Rendered product totals chart to {}", path.display());
        Ok(())
    }
}
