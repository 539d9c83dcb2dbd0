//! Core types for the competitive intelligence report: the hardcoded report
//! content, the sidebar filter selection, and the TOML configuration.

pub mod config;
pub mod filters;
pub mod report;

pub use config::{Config, ConfigError};
pub use filters::{CallType, FilterError, FilterSelection, Region};
pub use report::ReportStore;
