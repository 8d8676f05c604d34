//! Configuration for the salesgraph pipeline.
//!
//! Defaults reproduce the fixed locations a plain run uses; a TOML file can
//! override any subset of them.

pub mod loader;
pub mod settings;

pub use loader::SettingsLoader;
pub use settings::{ChartSettings, InputSettings, OutputSettings, Settings};
