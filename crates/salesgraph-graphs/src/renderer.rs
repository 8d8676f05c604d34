//! Chart rendering trait and shared styling helpers

use crate::{ChartConfig, ColorScheme};
use plotters::prelude::*;
use salesgraph_common::{ReportError, Result};
use std::path::Path;

/// The bitmap backend only touches the file when the chart is presented,
/// so a missing target directory is checked before any drawing starts.
pub(crate) fn check_target_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.is_dir() {
            return Err(ReportError::chart(format!(
                "chart directory {} does not exist",
                parent.display()
            )));
        }
    }
    Ok(())
}

/// Trait for rendering charts with shared styling options
pub trait ChartRenderer {
    /// Render the chart as a PNG image at the given path
    fn render_to_file(&self, config: &ChartConfig, path: &Path) -> Result<()>;

    /// Get colors from color scheme
    fn colors_for(&self, scheme: &ColorScheme) -> Vec<RGBColor> {
        match scheme {
            ColorScheme::Default => vec![
                RGBColor(31, 119, 180),  // Blue
                RGBColor(255, 127, 14),  // Orange
                RGBColor(44, 160, 44),   // Green
                RGBColor(214, 39, 40),   // Red
                RGBColor(148, 103, 189), // Purple
                RGBColor(140, 86, 75),   // Brown
                RGBColor(227, 119, 194), // Pink
                RGBColor(127, 127, 127), // Gray
            ],
            ColorScheme::Vibrant => vec![
                RGBColor(230, 25, 75),  // Red
                RGBColor(60, 180, 75),  // Green
                RGBColor(255, 225, 25), // Yellow
                RGBColor(0, 130, 200),  // Blue
                RGBColor(245, 130, 48), // Orange
                RGBColor(145, 30, 180), // Purple
            ],
            ColorScheme::Custom(colors) => colors
                .iter()
                .map(|color_str| self.parse_color(color_str))
                .collect(),
        }
    }

    /// Parse a color string (hex format) to RGBColor
    fn parse_color(&self, color_str: &str) -> RGBColor {
        if let Some(hex) = color_str.strip_prefix('#') {
            if hex.len() == 6 {
                if let (Ok(r), Ok(g), Ok(b)) = (
                    u8::from_str_radix(&hex[0..2], 16),
                    u8::from_str_radix(&hex[2..4], 16),
                    u8::from_str_radix(&hex[4..6], 16),
                ) {
                    return RGBColor(r, g, b);
                }
            }
        }
        // Default to black if parsing fails
        RGBColor(0, 0, 0)
    }

    /// Get background color from style config
    fn background_color(&self, config: &ChartConfig) -> RGBColor {
        config
            .style
            .background_color
            .as_ref()
            .map(|color| self.parse_color(color))
            .unwrap_or(RGBColor(255, 255, 255))
    }
}
