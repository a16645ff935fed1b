// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod errors;
pub mod formatting;
pub mod report;
pub mod thresholds;

// Re-export commonly used types
pub use crate::errors::CheckError;
pub use crate::report::{parse_report, parse_report_file, CoverageReport, FileCoverageRecord};
pub use crate::thresholds::{check_thresholds, ThresholdResult, Thresholds};
