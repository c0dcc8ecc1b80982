//! CLI argument definitions for proposal-lens.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use tracing::level_filters::LevelFilter;

use proposal_cli::logging::LogFormat;

#[derive(Parser)]
#[command(
    name = "proposal-lens",
    version,
    about = "Correlation analysis of delivery proposal acceptance",
    long_about = "Correlate delivery proposal acceptance with cost, distance, deadline and \
                  vendor variables.\n\n\
                  Runs three fixed date windows: before the propose-deadline and pickup price \
                  changes, after them, and the full range."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// More (-v, -vv) or less (-q) diagnostic output on stderr.
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// When to colorize tables and logs.
    #[command(flatten)]
    pub color: Color,

    /// Log level for proposal crates; takes precedence over -v/-q.
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Diagnostic format.
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Append diagnostics to this file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Load a proposal export and print a correlation matrix per date window.
    Analyze(AnalyzeArgs),

    /// List the date windows used by `analyze`.
    Windows,
}

#[derive(Parser)]
pub struct AnalyzeArgs {
    /// Proposal export (.xlsx, .xls, .xlsb, .ods or .csv).
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Worksheet to read (default: first sheet). Ignored for CSV input.
    #[arg(long = "sheet", value_name = "NAME")]
    pub sheet: Option<String>,

    /// Only analyse the given window (repeatable; see `windows`).
    #[arg(long = "window", value_name = "ID")]
    pub windows: Vec<String>,

    /// Write each matrix as CSV and JSON into this directory.
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Print only the numeric matrices, without the colored heatmap.
    #[arg(long = "no-heatmap")]
    pub no_heatmap: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl From<LogLevelArg> for LevelFilter {
    fn from(level: LogLevelArg) -> Self {
        match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        }
    }
}

impl From<LogFormatArg> for LogFormat {
    fn from(format: LogFormatArg) -> Self {
        match format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}
