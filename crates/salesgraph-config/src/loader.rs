//! Configuration loading utilities

use crate::Settings;
use salesgraph_common::{ReportError, Result};
use std::path::Path;

/// Default configuration file probed when no explicit path is given
const DEFAULT_CONFIG_FILE: &str = "salesgraph.toml";

/// Configuration loader for the application
pub struct SettingsLoader;

impl SettingsLoader {
    /// Load configuration from an explicit TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Settings> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            ReportError::config_with_source(
                format!("failed to read configuration file {}", path.display()),
                e,
            )
        })?;
        let settings: Settings = toml::from_str(&content)?;
        Ok(settings)
    }

    /// Load configuration from the default file if present, otherwise defaults
    pub fn load() -> Result<Settings> {
        if Path::new(DEFAULT_CONFIG_FILE).exists() {
            Self::load_from_file(DEFAULT_CONFIG_FILE)
        } else {
            Ok(Settings::default())
        }
    }
}
