//! Check subcommand for the respec-config CLI

use clap::{Args, ValueEnum};

/// Output format for check findings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ReportFormat {
    /// One finding per line, human readable (default)
    #[default]
    Text,
    /// JSON array of findings
    Json,
}

/// Arguments for the check subcommand
#[derive(Args, Debug, Default)]
pub struct CheckArgs {
    /// Report format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ReportFormat,

    /// Treat warnings as errors
    #[arg(long)]
    pub strict: bool,
}
