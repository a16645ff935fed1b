//! Typed errors for coverage report checking.
//!
//! Errors are categorized so the command layer can translate each into
//! user-visible text and an exit code instead of propagating unhandled
//! faults. Everything else flows through `anyhow::Result` at the boundary.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while locating and reading a coverage report.
///
/// Threshold violations and a missing Total line are not errors: they are
/// ordinary failures carried in `ThresholdResult`.
#[derive(Debug, Error)]
pub enum CheckError {
    /// The named report file does not exist.
    #[error("Coverage report '{}' not found", path.display())]
    ReportNotFound { path: PathBuf },

    /// The report exists but could not be read.
    #[error("Failed to read coverage report '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CheckError {
    /// Create a not-found error for the given report path.
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::ReportNotFound { path: path.into() }
    }

    /// Wrap an I/O failure with the report path it occurred on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
