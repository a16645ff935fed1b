use anyhow::Result;
use clap::Parser;
use covcheck::cli::Cli;
use covcheck::commands::check::{run_check, CheckConfig};
use covcheck::formatting::FormattingConfig;
use covcheck::thresholds::Thresholds;
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    env_logger::init();

    let cli = Cli::parse();
    let config = build_check_config(cli);

    let passed = run_check(&config)?;
    Ok(if passed {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn build_check_config(cli: Cli) -> CheckConfig {
    let formatting = if cli.plain {
        FormattingConfig::plain()
    } else {
        FormattingConfig::from_env()
    };

    CheckConfig {
        report_path: cli.report,
        thresholds: Thresholds {
            file: cli.threshold_file,
            total: cli.threshold_total,
        },
        format: cli.format,
        formatting,
    }
}
