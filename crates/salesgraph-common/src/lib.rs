//! Shared error types and logging bootstrap for salesgraph.

pub mod error;
pub mod logging;

pub use error::{ReportError, Result};
