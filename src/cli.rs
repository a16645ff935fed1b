use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::thresholds::{DEFAULT_FILE_THRESHOLD, DEFAULT_TOTAL_THRESHOLD};

#[derive(Parser, Debug)]
#[command(name = "covcheck")]
#[command(about = "Coverage threshold checker for luacov text reports", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the luacov report
    #[arg(default_value = "luacov.report.out")]
    pub report: PathBuf,

    /// Minimum acceptable per-file coverage percent
    #[arg(long = "threshold-file", default_value_t = DEFAULT_FILE_THRESHOLD)]
    pub threshold_file: f64,

    /// Minimum acceptable total coverage percent
    #[arg(long = "threshold-total", default_value_t = DEFAULT_TOTAL_THRESHOLD)]
    pub threshold_total: f64,

    /// Output format
    #[arg(short, long, value_enum, default_value = "terminal")]
    pub format: OutputFormat,

    /// Plain output: no colors, no emoji
    #[arg(long)]
    pub plain: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Terminal,
    Json,
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
