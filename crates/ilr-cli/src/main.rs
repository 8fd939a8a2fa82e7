//! ILR submission validator CLI.

use clap::{ColorChoice, Parser};
use ilr_cli::logging::{LogConfig, LogFormat, init_logging};
use ilr_cli::types::exit_code;
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;
mod summary;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{run_reference, run_rules, run_validate};
use crate::summary::print_summary;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(exit_code::RUN_FAILED);
    }
    let code = match cli.command {
        Command::Validate(args) => match run_validate(&args) {
            Ok(result) => {
                print_summary(&result);
                result.exit_code()
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                exit_code::RUN_FAILED
            }
        },
        Command::Rules(args) => report_outcome(run_rules(&args)),
        Command::Reference(args) => report_outcome(run_reference(&args)),
    };
    std::process::exit(code);
}

fn report_outcome(outcome: anyhow::Result<()>) -> i32 {
    match outcome {
        Ok(()) => exit_code::CLEAN,
        Err(error) => {
            eprintln!("error: {error:#}");
            exit_code::RUN_FAILED
        }
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.log_data = cli.log_data;
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
