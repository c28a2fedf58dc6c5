//! respec-config
//!
//! Builds, checks, and emits the configuration object consumed by the
//! specification renderer.

use anyhow::{Result, bail};
use clap::Parser;
use respec_config::check::{check_config, has_errors};
use respec_config::cli::check::{CheckArgs, ReportFormat};
use respec_config::cli::emit::EmitArgs;
use respec_config::cli::init::{InitArgs, existing_config, starter_config};
use respec_config::cli::{Cli, Command};
use respec_config::config::{ConfigLoader, ConfigPaths, SpecConfig};
use respec_config::error::Severity;
use respec_config::format;
use std::fs::OpenOptions;
use std::io::Write;
use tracing::{Level, debug, info};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on --log option
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    match cli.log.as_str() {
        "0" | "off" => {
            // No logging
        }
        "1" | "stdout" => {
            let subscriber = FmtSubscriber::builder()
                .with_max_level(level)
                .with_writer(std::io::stdout)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
        "2" | "stderr" => {
            let subscriber = FmtSubscriber::builder()
                .with_max_level(level)
                .with_writer(std::io::stderr)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
        filename => {
            // Log to file (append mode)
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(filename)?;
            let subscriber = FmtSubscriber::builder()
                .with_max_level(level)
                .with_writer(file)
                .with_ansi(false)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
    }

    // If an explicit config path was given, bridge it to the environment
    // variable the loader reads.
    // SAFETY: This is safe at program startup before any other threads are spawned
    if let Some(config_path) = &cli.config {
        // Use unsafe block for set_var which is required in Rust 2024 edition
        unsafe {
            std::env::set_var("RESPEC_CONFIG_PATH", config_path);
        }
    }

    let profile = cli.profile.as_deref();
    match &cli.command {
        Some(Command::Init(args)) => run_init(args),
        Some(Command::Emit(args)) => {
            let loader = load_configuration(profile)?;
            run_emit(loader.into_config(), args)
        }
        Some(Command::Check(args)) => {
            let loader = load_configuration(profile)?;
            run_check(loader.config(), args)
        }
        // Default: emit JSON to stdout
        None => {
            let loader = load_configuration(profile)?;
            run_emit(loader.into_config(), &EmitArgs::default())
        }
    }
}

/// Load and merge configuration tiers, honoring the --profile flag.
fn load_configuration(profile: Option<&str>) -> Result<ConfigLoader> {
    let loader = ConfigLoader::load_with_paths(ConfigPaths::discover(), profile)?;

    if let Some(path) = loader.config_path() {
        debug!(path = %path.display(), "using project configuration");
    }
    if let Some(profile) = loader.profile() {
        info!(profile = %profile, "profile overlay applied");
    }

    Ok(loader)
}

/// Emit the merged configuration to stdout or a file.
fn run_emit(config: SpecConfig, args: &EmitArgs) -> Result<()> {
    let output = format::emit(&config, args.format.to_output_format(), args.wraps_tag())?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, &output)?;
            info!(path = %path.display(), "configuration written");
        }
        None => {
            print!("{}", output);
        }
    }

    Ok(())
}

/// Run structural checks and report findings; fail on errors.
fn run_check(config: &SpecConfig, args: &CheckArgs) -> Result<()> {
    let findings = check_config(config);

    match args.format {
        ReportFormat::Text => {
            for finding in &findings {
                match &finding.field {
                    Some(field) => println!("{} [{}]", finding, field),
                    None => println!("{}", finding),
                }
            }
        }
        ReportFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&findings)?);
        }
    }

    let errors = findings
        .iter()
        .filter(|f| f.severity == Severity::Error)
        .count();
    let warnings = findings.len() - errors;
    info!(errors, warnings, "check finished");

    if has_errors(&findings) {
        bail!("configuration check failed with {} error(s)", errors);
    }
    if args.strict && !findings.is_empty() {
        bail!(
            "configuration check failed with {} warning(s) (--strict)",
            warnings
        );
    }

    Ok(())
}

/// Write a starter configuration file.
fn run_init(args: &InitArgs) -> Result<()> {
    if let Some(existing) = existing_config(&args.dir) {
        if !args.force {
            bail!(
                "{} already exists (use --force to overwrite)",
                existing.display()
            );
        }
    }

    std::fs::create_dir_all(&args.dir)?;
    let target = args.target_path();
    let mut file = std::fs::File::create(&target)?;
    file.write_all(starter_config().as_bytes())?;

    println!("Created {}", target.display());
    Ok(())
}
