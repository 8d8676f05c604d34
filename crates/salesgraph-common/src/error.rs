//! Error types and utilities for salesgraph

use thiserror::Error;

/// Result type alias for salesgraph operations
pub type Result<T> = std::result::Result<T, ReportError>;

/// Main error type for salesgraph operations
#[derive(Error, Debug)]
pub enum ReportError {
    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The source workbook cannot be opened
    #[error("Source unavailable: {message}")]
    Source {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A named sheet is absent from the source workbook
    #[error("Sheet not found: {sheet}")]
    SheetMissing { sheet: String },

    /// A cell could not be converted to the expected type
    #[error("Invalid data in sheet '{sheet}': {message}")]
    InvalidData { sheet: String, message: String },

    /// An aggregation was asked to rank zero rows
    #[error("Empty input: {message}")]
    EmptyInput { message: String },

    /// The output artifact cannot be created or written
    #[error("Destination unwritable: {message}")]
    Destination {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Chart rendering errors
    #[error("Chart error: {message}")]
    Chart {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl ReportError {
    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new configuration error with source
    pub fn config_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new source-unavailable error
    pub fn source(msg: impl Into<String>) -> Self {
        Self::Source {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new source-unavailable error with source
    pub fn source_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Source {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new sheet-missing error
    pub fn sheet_missing(sheet: impl Into<String>) -> Self {
        Self::SheetMissing {
            sheet: sheet.into(),
        }
    }

    /// Create a new invalid-data error
    pub fn invalid_data(sheet: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::InvalidData {
            sheet: sheet.into(),
            message: msg.into(),
        }
    }

    /// Create a new empty-input error
    pub fn empty_input(msg: impl Into<String>) -> Self {
        Self::EmptyInput {
            message: msg.into(),
        }
    }

    /// Create a new destination error
    pub fn destination(msg: impl Into<String>) -> Self {
        Self::Destination {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new destination error with source
    pub fn destination_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Destination {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new chart error
    pub fn chart(msg: impl Into<String>) -> Self {
        Self::Chart {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new chart error with source
    pub fn chart_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Chart {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }
}

/// Convert from toml::de::Error to ReportError
impl From<toml::de::Error> for ReportError {
    fn from(err: toml::de::Error) -> Self {
        Self::config_with_source("TOML parsing error", err)
    }
}

#[cfg(feature = "plotters")]
/// Convert from plotters drawing errors to ReportError
impl<T> From<plotters::drawing::DrawingAreaErrorKind<T>> for ReportError
where
    T: std::error::Error + Send + Sync + 'static,
{
    fn from(err: plotters::drawing::DrawingAreaErrorKind<T>) -> Self {
        Self::chart_with_source("Chart rendering failed", err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{error::Error, io};

    #[test]
    fn test_error_creation() {
        let config_error = ReportError::config("bad setting");
        assert!(config_error.to_string().contains("Configuration error"));
        assert!(config_error.to_string().contains("bad setting"));

        let sheet_error = ReportError::sheet_missing("products");
        assert_eq!(sheet_error.to_string(), "Sheet not found: products");

        let data_error = ReportError::invalid_data("transactions", "row 3: bad quantity");
        assert!(data_error.to_string().contains("transactions"));
        assert!(data_error.to_string().contains("row 3"));

        let empty_error = ReportError::empty_input("no product rows");
        assert!(empty_error.to_string().contains("Empty input"));
    }

    #[test]
    fn test_error_with_source() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "missing directory");
        let wrapped = ReportError::destination_with_source("cannot write results.xlsx", io_error);

        assert!(wrapped.to_string().contains("Destination unwritable"));
        assert!(wrapped.to_string().contains("results.xlsx"));
        assert!(wrapped.source().is_some());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let report_error: ReportError = io_error.into();

        assert!(report_error.to_string().contains("I/O error"));
        assert!(report_error.source().is_some());
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_error = toml::from_str::<toml::Value>("not = = valid").unwrap_err();
        let report_error: ReportError = toml_error.into();

        assert!(report_error.to_string().contains("Configuration error"));
        assert!(report_error.source().is_some());
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_error() -> Result<()> {
            Err(ReportError::source("workbook missing"))
        }

        let error = returns_error().unwrap_err();
        assert!(error.to_string().contains("Source unavailable"));
    }

    #[test]
    fn test_error_chain_preservation() {
        let root_error = io::Error::new(io::ErrorKind::PermissionDenied, "root cause");
        let top_error = ReportError::source_with_source("cannot open workbook", root_error);

        let mut current: &dyn Error = &top_error;
        let mut depth = 0;
        while let Some(source) = current.source() {
            current = source;
            depth += 1;
        }
        assert!(depth >= 1);
    }
}
