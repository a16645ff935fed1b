//! The check command: parse a luacov report, evaluate thresholds, render
//! the verdict, and report whether the run passed.

use crate::cli::OutputFormat;
use crate::formatting::FormattingConfig;
use crate::report::{parse_report_file, CoverageReport};
use crate::thresholds::{check_thresholds, ThresholdResult, Thresholds};
use anyhow::Result;
use serde::Serialize;
use std::path::PathBuf;

/// Cutoff for the glyph column of the per-file summary table. Fixed at 25%
/// and independent of `--threshold-file`; the glyphs are informational only
/// and the pass/fail verdict always comes from `check_thresholds`.
const DISPLAY_CUTOFF: f64 = 25.0;

pub struct CheckConfig {
    pub report_path: PathBuf,
    pub thresholds: Thresholds,
    pub format: OutputFormat,
    pub formatting: FormattingConfig,
}

/// Machine-readable result of one check run, emitted by `--format json`.
#[derive(Debug, Serialize)]
pub struct CheckOutcome {
    pub report: CoverageReport,
    pub thresholds: Thresholds,
    pub passed: bool,
    pub failures: Vec<String>,
}

/// Run the check end to end. Returns `Ok(true)` when all thresholds passed.
///
/// A missing or unreadable report is printed to stderr and reported as a
/// failed run, never as a panic or an unhandled error.
pub fn run_check(config: &CheckConfig) -> Result<bool> {
    let report = match parse_report_file(&config.report_path) {
        Ok(report) => report,
        Err(err) => {
            eprintln!("Error: {}", err);
            eprintln!("No coverage data available");
            return Ok(false);
        }
    };

    let result = check_thresholds(&report, config.thresholds);

    match config.format {
        OutputFormat::Json => print_json(&report, &result, config)?,
        OutputFormat::Terminal => print_terminal(&report, &result, config),
    }

    Ok(result.passed)
}

fn print_json(
    report: &CoverageReport,
    result: &ThresholdResult,
    config: &CheckConfig,
) -> Result<()> {
    let outcome = CheckOutcome {
        report: report.clone(),
        thresholds: config.thresholds,
        passed: result.passed,
        failures: result.failures.clone(),
    };
    println!("{}", serde_json::to_string_pretty(&outcome)?);
    Ok(())
}

fn print_terminal(report: &CoverageReport, result: &ThresholdResult, config: &CheckConfig) {
    let fmt = &config.formatting;

    println!("Checking code coverage thresholds...");
    println!("{}", "=".repeat(60));

    match report.total_percent {
        Some(total) => println!("Total Coverage: {:.2}%", total),
        None => println!("Total Coverage: unknown"),
    }
    println!("Files Analyzed: {}", report.file_count());
    println!();

    if result.passed {
        println!(
            "{}",
            fmt.success(&format!(
                "{} All coverage thresholds passed!",
                fmt.glyph("✅", "[PASS]")
            ))
        );
    } else {
        println!(
            "{}",
            fmt.error(&format!(
                "{} Coverage thresholds failed!",
                fmt.glyph("❌", "[FAIL]")
            ))
        );
        println!("\nFailures:");
        for failure in &result.failures {
            println!("  - {}", failure);
        }
    }

    print_file_summary(report, fmt);
}

fn print_file_summary(report: &CoverageReport, fmt: &FormattingConfig) {
    println!("\nFile Coverage Summary:");
    println!("{}", "-".repeat(60));

    for record in report.files.values() {
        let status = if record.coverage_percent >= DISPLAY_CUTOFF {
            fmt.glyph("✅", "[PASS]")
        } else {
            fmt.glyph("❌", "[FAIL]")
        };
        println!(
            "{} {:<45} {:>6.2}%",
            status, record.path, record.coverage_percent
        );
    }
}
