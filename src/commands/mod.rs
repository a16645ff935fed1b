//! CLI command implementations for covcheck.
//!
//! The single command parses a luacov report, evaluates thresholds, and
//! renders the verdict.

pub mod check;

pub use check::{run_check, CheckConfig, CheckOutcome};
