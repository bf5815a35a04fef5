//! # dirsum
//!
//! A CLI tool that lists the immediate entries of a directory together with
//! their total sizes, sorted by size.
//!
//! Files are measured by their length and subdirectories by recursively
//! summing the files they contain. Entries are measured concurrently, and an
//! entry that cannot be measured is reported and left out rather than
//! aborting the run.
//!
//! ## Usage
//!
//! ```bash
//! # Smallest entries first
//! dirsum --root ~/Downloads
//!
//! # Largest entries first
//! dirsum --root ~/Downloads --sort DESC
//!
//! # JSON for scripting
//! dirsum --root ~/Downloads --json
//! ```

mod cli;

use anyhow::{Result, bail};
use clap::Parser;
use cli::{Cli, Commands, ConfigCommand};
use colored::Colorize;
use dirsum::{collector::Collector, config::FileConfig, output::JsonOutput, report::Report};
use std::process::exit;

/// Entry point for the dirsum application.
///
/// This function handles all errors gracefully by calling [`inner_main`] and printing
/// any errors to stderr before exiting with a non-zero status code.
fn main() {
    if let Err(err) = inner_main() {
        eprintln!("Error: {err}");

        exit(1);
    }
}

/// Main application logic that can return errors.
///
/// Parses arguments, layers them over the config file, measures the root
/// directory, then prints the ranked report as a table or as JSON.
///
/// # Errors
///
/// Returns errors for a missing or unreadable root directory, invalid
/// exclude patterns, thread-pool configuration, or JSON serialization.
fn inner_main() -> Result<()> {
    let args = Cli::parse();

    if let Some(Commands::Config { command }) = &args.subcommand {
        return handle_config_command(command);
    }

    let json_mode = args.json();
    let file_config = load_config(json_mode);

    let scan = args.scan_config(&file_config)?;
    let scan_options = args.scan_options(&file_config)?;

    let collector = Collector::new(scan_options).with_quiet(json_mode);
    let collection = collector.collect(&scan.root)?;
    let report = Report::new(&collection, scan.direction);

    if json_mode {
        let output = JsonOutput::from_report(&report);
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if report.entries().is_empty() && !collection.is_partial() {
        println!("{}", "✨ Directory is empty".green());
    } else {
        report.print();
    }

    Ok(())
}

// ── Config subcommand ────────────────────────────────────────────────

/// Default config file template written by `config init`.
const CONFIG_TEMPLATE: &str = r#"# dirsum configuration
# All values shown are their defaults. Uncomment and change as needed.

# Directory to list when --root is not given
# root = "~/Downloads"

# Sort direction by size: "ASK" (smallest first) or "DESC" (largest first)
# sort = "ASK"

[scanning]
# Number of threads used to measure entries (0 = all CPU cores)
# threads = 0

# Glob patterns for top-level entry names to skip
# exclude = []
"#;

/// Dispatch a `config` subcommand.
fn handle_config_command(cmd: &ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Path => match FileConfig::config_path() {
            Some(path) => println!("{}", path.display()),
            None => bail!("Could not determine the config directory on this platform"),
        },
        ConfigCommand::Show => show_config()?,
        ConfigCommand::Init => init_config()?,
    }
    Ok(())
}

/// Print the effective configuration (file values merged with defaults).
fn show_config() -> Result<()> {
    let path = FileConfig::config_path();

    let (file_exists, config) = match &path {
        Some(p) if p.exists() => (true, FileConfig::load()?),
        _ => (false, FileConfig::default()),
    };

    match &path {
        Some(p) if file_exists => println!("Config file: {} (found)", p.display()),
        Some(p) => println!(
            "Config file: {} (not found - showing defaults)",
            p.display()
        ),
        None => println!("Config file: (cannot determine path on this platform)"),
    }

    println!();
    println!("{}", format_config(&config));
    Ok(())
}

/// Format a [`FileConfig`] as a human-readable table, showing defaults for `None` fields.
fn format_config(config: &FileConfig) -> String {
    let root = config.root.as_ref().map_or_else(
        || "(none)  (default)".to_string(),
        |p| format!("\"{}\"", p.display()),
    );
    let sort = config
        .sort
        .as_deref()
        .map_or_else(|| "\"ASK\"  (default)".to_string(), |v| format!("\"{v}\""));
    let threads = config
        .scanning
        .threads
        .map_or_else(|| "0 (all cores)  (default)".to_string(), |v| v.to_string());
    let exclude = match config.scanning.exclude.as_deref() {
        Some(v) if !v.is_empty() => {
            let items: Vec<String> = v.iter().map(|p| format!("\"{p}\"")).collect();
            format!("[{}]", items.join(", "))
        }
        _ => "[]  (default)".to_string(),
    };

    format!(
        "\
root     = {root}
sort     = {sort}

[scanning]
threads  = {threads}
exclude  = {exclude}"
    )
}

/// Write a default config template to the config file path if it does not exist yet.
fn init_config() -> Result<()> {
    let Some(path) = FileConfig::config_path() else {
        bail!("Could not determine the config directory on this platform");
    };

    if path.exists() {
        println!("Config file already exists at: {}", path.display());
        println!("Remove it first if you want to regenerate it.");
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            anyhow::anyhow!(
                "Failed to create config directory {}: {e}",
                parent.display()
            )
        })?;
    }

    std::fs::write(&path, CONFIG_TEMPLATE)
        .map_err(|e| anyhow::anyhow!("Failed to write config file {}: {e}", path.display()))?;

    println!("Config file written to: {}", path.display());
    Ok(())
}

/// Load the configuration file, falling back to defaults on failure.
fn load_config(json_mode: bool) -> FileConfig {
    match FileConfig::load() {
        Ok(config) => config,
        Err(e) => {
            if !json_mode {
                eprintln!("{} {e}", "Warning: Failed to load config file:".yellow());
            }
            FileConfig::default()
        }
    }
}
