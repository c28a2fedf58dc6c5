//! CLI command definitions for respec-config
//!
//! This module defines the CLI structure using clap's derive macros.
//! The main entry point is the `Cli` struct which contains subcommands.

pub mod check;
pub mod emit;
pub mod init;

use check::CheckArgs;
use clap::{Parser, Subcommand};
use emit::EmitArgs;
use init::InitArgs;

/// Build, check, and emit renderer configuration for specification documents
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a configuration file (bypasses tier discovery)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Profile overlay to apply (respec.<NAME>.yaml next to the project file)
    #[arg(short, long, global = true, value_name = "NAME")]
    pub profile: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Logging output: 0/off, 1/stdout, 2/stderr (default), or filename
    #[arg(short, long, default_value = "2", global = true)]
    pub log: String,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Emit the merged configuration for the renderer (default subcommand)
    Emit(EmitArgs),

    /// Run structural checks against the merged configuration
    Check(CheckArgs),

    /// Scaffold a starter configuration file
    Init(InitArgs),
}
