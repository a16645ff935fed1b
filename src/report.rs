//! Parser for luacov plain-text coverage reports.
//!
//! A report is scanned line by line. Lines that match the fixed file-record
//! layout become [`FileCoverageRecord`]s; the first line starting with the
//! literal `Total` token supplies the aggregate percentage. Everything else
//! (headers, separators, blank lines) is ignored.

use crate::errors::CheckError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Matches a per-file coverage line, e.g.
/// `lua/claude-code/init.lua                   100.00%   123     0`
static FILE_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(lua/claude-code/[^\s]+\.lua)\s+(\d+\.\d+)%\s+(\d+)\s+(\d+)").unwrap()
});

/// Matches the summary line, e.g. `Total                      85.42%   410    58`
static TOTAL_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^Total\s+(\d+\.\d+)%\s+(\d+)\s+(\d+)").unwrap());

/// Coverage measured for a single source file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileCoverageRecord {
    pub path: String,
    pub coverage_percent: f64,
    pub lines_hit: u64,
    pub lines_missed: u64,
}

/// The parsed contents of one coverage report.
///
/// Files are keyed by path; BTreeMap ordering gives the checker and the
/// printed summary a deterministic sorted-by-path iteration.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct CoverageReport {
    pub files: BTreeMap<String, FileCoverageRecord>,
    /// Aggregate coverage from the first `Total` line, if one was found.
    pub total_percent: Option<f64>,
}

impl CoverageReport {
    pub fn file_count(&self) -> usize {
        self.files.len()
    }
}

/// Read and parse the report at `path`.
///
/// A missing file is a [`CheckError::ReportNotFound`], not an empty report.
/// A readable file with no matching lines parses successfully to an empty
/// report with `total_percent` unset.
pub fn parse_report_file(path: &Path) -> Result<CoverageReport, CheckError> {
    if !path.exists() {
        return Err(CheckError::not_found(path));
    }

    let content = fs::read_to_string(path).map_err(|source| CheckError::io(path, source))?;
    Ok(parse_report(&content))
}

/// Parse report text into a [`CoverageReport`]. Pure; never fails.
pub fn parse_report(content: &str) -> CoverageReport {
    let mut report = CoverageReport::default();

    for line in content.lines() {
        if let Some(caps) = FILE_LINE.captures(line) {
            let record = FileCoverageRecord {
                path: caps[1].to_string(),
                coverage_percent: caps[2].parse().unwrap_or(0.0),
                lines_hit: caps[3].parse().unwrap_or(0),
                lines_missed: caps[4].parse().unwrap_or(0),
            };
            if let Some(previous) = report.files.insert(record.path.clone(), record) {
                log::debug!("Duplicate coverage record for {}, keeping last", previous.path);
            }
        }
    }

    // First Total line wins; later ones are ignored. The early exit keeps
    // the scan-order dependency explicit.
    for line in content.lines() {
        if let Some(caps) = TOTAL_LINE.captures(line) {
            report.total_percent = caps[1].parse().ok();
            break;
        }
    }

    log::debug!(
        "Parsed {} file records, total = {:?}",
        report.files.len(),
        report.total_percent
    );

    report
}
