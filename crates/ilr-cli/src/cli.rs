//! CLI argument definitions for the ILR validator.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "ilr-validator",
    version,
    about = "Validate ILR learner submissions against the business-rule catalog",
    long_about = "Validate an ILR submission (JSON) against the ILR business rules.\n\n\
                  Reference data (LARS, FCS, organisations and rule metadata) is read\n\
                  from a manifest-pinned directory whose checksums are verified."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow learner reference numbers in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate an ILR message and write a JSON report.
    Validate(ValidateArgs),

    /// List the rule catalog with the severity and category a run would apply.
    Rules(RulesArgs),

    /// Verify a reference data directory and print a summary.
    Reference(ReferenceArgs),
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// Path to the ILR message (JSON).
    #[arg(value_name = "MESSAGE")]
    pub message: PathBuf,

    /// Reference data directory (default: config value, then `ILR_REFERENCE_DIR`,
    /// then the bundled `reference/`).
    #[arg(long = "reference-dir", value_name = "DIR")]
    pub reference_dir: Option<PathBuf>,

    /// Validator config file (default: `ilr-validator.toml` next to the message).
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Teaching year, e.g. `2526` or `2025/26` (default: the year containing
    /// the file preparation date).
    #[arg(long = "academic-year", value_name = "YEAR")]
    pub academic_year: Option<String>,

    /// Output directory for `validation_report.json` (default: `<MESSAGE dir>/output`).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Skip a rule; may be repeated. Adds to the config's disabled list.
    #[arg(long = "disable", value_name = "RULE")]
    pub disable: Vec<String>,

    /// Skip reference checksum verification.
    #[arg(long = "no-verify")]
    pub no_verify: bool,

    /// Validate and print the summary without writing the report.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct RulesArgs {
    /// Reference data directory holding the rule metadata (same default as `validate`).
    #[arg(long = "reference-dir", value_name = "DIR")]
    pub reference_dir: Option<PathBuf>,

    /// Validator config file (default: `ilr-validator.toml` in the current directory).
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Skip reference checksum verification.
    #[arg(long = "no-verify")]
    pub no_verify: bool,
}

#[derive(Parser)]
pub struct ReferenceArgs {
    /// Reference data directory (default: `ILR_REFERENCE_DIR`, then the bundled `reference/`).
    #[arg(value_name = "DIR")]
    pub reference_dir: Option<PathBuf>,

    /// Print the verification result as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
