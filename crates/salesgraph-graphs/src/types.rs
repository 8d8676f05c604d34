//! Chart types and data structures

use serde::{Deserialize, Serialize};

/// One chart input row: a product name and its summed total
#[derive(Debug, Clone, PartialEq)]
pub struct TotalDataPoint {
    pub name: String,
    pub total: f64,
}

/// Chart configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    pub style: StyleConfig,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            title: "Chart".to_string(),
            width: 800,
            height: 600,
            x_label: None,
            y_label: None,
            style: StyleConfig::default(),
        }
    }
}

/// Color scheme for charts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ColorScheme {
    Default,
    Vibrant,
    Custom(Vec<String>),
}

/// Font configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FontConfig {
    pub family: String,
    pub size: u32,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            family: "sans-serif".to_string(),
            size: 12,
        }
    }
}

/// Margin configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarginConfig {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl Default for MarginConfig {
    fn default() -> Self {
        Self {
            top: 20,
            right: 20,
            bottom: 40,
            left: 60,
        }
    }
}

/// Styling configuration shared by both charts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StyleConfig {
    pub color_scheme: ColorScheme,
    pub background_color: Option<String>,
    pub title_font: FontConfig,
    pub label_font: FontConfig,
    pub margins: MarginConfig,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            color_scheme: ColorScheme::Default,
            background_color: Some("#FFFFFF".to_string()),
            title_font: FontConfig {
                family: "sans-serif".to_string(),
                size: 20,
            },
            label_font: FontConfig::default(),
            margins: MarginConfig::default(),
        }
    }
}
