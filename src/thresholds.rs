//! Threshold evaluation over a parsed coverage report.

use crate::report::CoverageReport;
use serde::Serialize;

/// Minimum acceptable coverage percentages. Values at or above a threshold
/// pass; only strictly-below fails.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Thresholds {
    /// Per-file minimum coverage percent.
    pub file: f64,
    /// Aggregate minimum coverage percent.
    pub total: f64,
}

pub const DEFAULT_FILE_THRESHOLD: f64 = 25.0;
pub const DEFAULT_TOTAL_THRESHOLD: f64 = 70.0;

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            file: DEFAULT_FILE_THRESHOLD,
            total: DEFAULT_TOTAL_THRESHOLD,
        }
    }
}

/// Verdict of a threshold check. Invariant: `passed == failures.is_empty()`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThresholdResult {
    pub passed: bool,
    pub failures: Vec<String>,
}

/// Evaluate `report` against `thresholds`.
///
/// Files are visited in sorted path order so the failure list is
/// reproducible. A report without a Total line always fails: the aggregate
/// coverage cannot be determined, whatever the thresholds are.
pub fn check_thresholds(report: &CoverageReport, thresholds: Thresholds) -> ThresholdResult {
    let mut failures = Vec::new();

    for record in report.files.values() {
        if record.coverage_percent < thresholds.file {
            failures.push(format!(
                "File '{}' coverage {:.2}% is below threshold of {:.1}%",
                record.path, record.coverage_percent, thresholds.file
            ));
        }
    }

    match report.total_percent {
        Some(total) if total < thresholds.total => {
            failures.push(format!(
                "Total coverage {:.2}% is below threshold of {:.1}%",
                total, thresholds.total
            ));
        }
        Some(_) => {}
        None => {
            failures.push("Could not determine total coverage".to_string());
        }
    }

    ThresholdResult {
        passed: failures.is_empty(),
        failures,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::parse_report;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_low_file_fails_while_total_passes() {
        let report = parse_report(indoc! {"
            lua/claude-code/init.lua                    10.00%    10    90
            Total                      80.00%   410    58
        "});

        let result = check_thresholds(&report, Thresholds::default());

        assert!(!result.passed);
        assert_eq!(
            result.failures,
            vec!["File 'lua/claude-code/init.lua' coverage 10.00% is below threshold of 25.0%"]
        );
    }

    #[test]
    fn test_missing_total_is_always_a_failure() {
        let report = parse_report("");

        let result = check_thresholds(&report, Thresholds::default());

        assert!(!result.passed);
        assert_eq!(result.failures, vec!["Could not determine total coverage"]);
    }

    #[test]
    fn test_coverage_equal_to_threshold_passes() {
        let report = parse_report(indoc! {"
            lua/claude-code/init.lua                    25.00%    25    75
            Total                      70.00%   410    58
        "});

        let result = check_thresholds(&report, Thresholds::default());

        assert!(result.passed);
        assert!(result.failures.is_empty());
    }

    #[test]
    fn test_low_total_fails() {
        let report = parse_report(indoc! {"
            lua/claude-code/init.lua                    90.00%    90    10
            Total                      42.17%   410    58
        "});

        let result = check_thresholds(&report, Thresholds::default());

        assert_eq!(
            result.failures,
            vec!["Total coverage 42.17% is below threshold of 70.0%"]
        );
    }

    #[test]
    fn test_failures_listed_in_path_order() {
        let report = parse_report(indoc! {"
            lua/claude-code/zebra.lua                    5.00%    5    95
            lua/claude-code/alpha.lua                    1.00%    1    99
            Total                      80.00%   410    58
        "});

        let result = check_thresholds(&report, Thresholds::default());

        assert_eq!(result.failures.len(), 2);
        assert!(result.failures[0].contains("alpha.lua"));
        assert!(result.failures[1].contains("zebra.lua"));
    }

    #[test]
    fn test_checker_is_idempotent() {
        let report = parse_report(indoc! {"
            lua/claude-code/init.lua                    10.00%    10    90
        "});

        let first = check_thresholds(&report, Thresholds::default());
        let second = check_thresholds(&report, Thresholds::default());

        assert_eq!(first, second);
    }

    #[test]
    fn test_custom_thresholds_are_honored() {
        let report = parse_report(indoc! {"
            lua/claude-code/init.lua                    50.00%    50    50
            Total                      60.00%   410    58
        "});

        let strict = check_thresholds(
            &report,
            Thresholds {
                file: 60.0,
                total: 65.0,
            },
        );
        assert_eq!(strict.failures.len(), 2);

        let lenient = check_thresholds(
            &report,
            Thresholds {
                file: 10.0,
                total: 50.0,
            },
        );
        assert!(lenient.passed);
    }
}
