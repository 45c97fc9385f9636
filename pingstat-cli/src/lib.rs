//! pingstat CLI Library
//!
//! Shared functionality for the pingstat command-line tool.

pub mod config;
pub mod report;

pub use config::{AnalysisConfig, Config, ConfigError, ReportConfig, ReportFormat};
pub use report::{display_summary, format_percent, format_rtt, to_json, write_summary};
