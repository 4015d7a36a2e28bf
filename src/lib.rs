// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod coverage;
pub mod errors;
pub mod formatting;
pub mod report;

// Re-export commonly used types
pub use crate::config::{ConfigOverrides, FullyCoveredFilter, ReporterConfig};
pub use crate::coverage::{load_coverage, CoverageResult, InputFormat, SourceFile, SourceLine};
pub use crate::errors::{Error, Result};
pub use crate::report::{
    colorize_percentage, format_percentage, group_missed_lines, OrderMethod, Report, ReportRow,
    Reporter,
};
