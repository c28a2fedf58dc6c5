//! Emit subcommand for the respec-config CLI
//!
//! Emits the merged configuration in the form the renderer consumes:
//! plain JSON, or a `var respecConfig = ...;` script payload, optionally
//! wrapped in a `<script class="remove">` element.

use crate::format::OutputFormat;
use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// Output format choice on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum EmitFormat {
    /// Plain JSON object (default)
    #[default]
    Json,
    /// JavaScript variable declaration
    Script,
}

impl EmitFormat {
    /// Convert to the formatter's own type.
    pub fn to_output_format(self) -> OutputFormat {
        match self {
            EmitFormat::Json => OutputFormat::Json,
            EmitFormat::Script => OutputFormat::Script,
        }
    }
}

/// Arguments for the emit subcommand
#[derive(Args, Debug, Default)]
pub struct EmitArgs {
    /// Output file path (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: EmitFormat,

    /// Wrap script output in a <script class="remove"> element
    #[arg(long)]
    pub tag: bool,
}

impl EmitArgs {
    /// Whether the output should carry the script-tag wrapper.
    ///
    /// The wrapper only exists for the script form; `--tag` with JSON
    /// output is ignored.
    pub fn wraps_tag(&self) -> bool {
        self.tag && self.format == EmitFormat::Script
    }
}
