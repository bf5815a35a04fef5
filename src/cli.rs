//! Command-line interface definition and argument parsing.
//!
//! This module defines all command-line arguments and options using the
//! [clap](https://docs.rs/clap/) library and turns them into the validated
//! configuration consumed by the scan.
//!
//! Helper methods on [`Cli`] accept a [`FileConfig`] reference so that config-file
//! values act as defaults that CLI arguments can override (layered config).

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use glob::Pattern;

use dirsum::config::file::{FileConfig, expand_tilde};
use dirsum::config::{ScanConfig, ScanOptions, SortDirection};

/// Command-line arguments for controlling how entries are measured.
#[derive(Parser)]
struct ScanningArgs {
    /// The number of threads to use for measuring entries
    ///
    /// A value of 0 uses the default number of threads (typically the number of CPU cores).
    #[arg(short = 't', long)]
    threads: Option<usize>,

    /// Skip top-level entries whose name matches this glob pattern
    ///
    /// Can be specified multiple times, e.g. `--exclude .git --exclude '*.tmp'`.
    /// Patterns from the config file are applied as well.
    #[arg(short = 'e', long, action = clap::ArgAction::Append)]
    exclude: Vec<String>,
}

/// Top-level subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Inspect or initialise the configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

/// Subcommands for `config`.
#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration (file values + defaults for unset keys)
    Show,
    /// Write a default config.toml if none exists yet
    Init,
    /// Print the path to the config file
    Path,
}

/// Main command-line interface structure.
///
/// Helper methods accept a [`FileConfig`] reference so that config-file values act as
/// defaults when the corresponding CLI argument is not provided.
#[derive(Parser)]
#[command(name = "dirsum")]
#[command(about = "List the entries of a directory with their total sizes, sorted by size")]
#[command(version)]
pub struct Cli {
    /// Subcommand (e.g. `config`)
    #[command(subcommand)]
    pub subcommand: Option<Commands>,

    /// Directory whose entries are measured
    ///
    /// Required unless `root` is set in the config file.
    #[arg(short = 'r', long)]
    root: Option<PathBuf>,

    /// Sort direction by size: ASK (smallest first) or DESC (largest first)
    #[arg(short = 's', long, value_enum, ignore_case = true)]
    sort: Option<SortDirection>,

    /// Output results as a single JSON object for scripting/piping
    ///
    /// When enabled, the table, colors and progress spinner are suppressed
    /// and a single JSON document is printed to stdout.
    #[arg(long)]
    json: bool,

    /// Scanning options
    #[command(flatten)]
    scanning: ScanningArgs,
}

impl Cli {
    /// Whether `--json` structured output mode is enabled.
    #[must_use]
    pub const fn json(&self) -> bool {
        self.json
    }

    /// Resolve the root directory from CLI args or config file.
    ///
    /// Priority: CLI argument > config file `root`. Tilde expansion is applied
    /// to the config file value.
    #[must_use]
    pub fn root(&self, config: &FileConfig) -> Option<PathBuf> {
        self.root
            .clone()
            .or_else(|| config.root.as_deref().map(expand_tilde))
    }

    /// Resolve the sort direction from CLI args and config file.
    ///
    /// Priority: CLI argument > config file > default (`ASK`). An unknown
    /// token in the config file falls back to the default.
    #[must_use]
    pub fn sort_direction(&self, config: &FileConfig) -> SortDirection {
        self.sort
            .or_else(|| config.sort.as_deref().and_then(SortDirection::from_token))
            .unwrap_or_default()
    }

    /// Build the validated scan request.
    ///
    /// # Errors
    ///
    /// Returns an error if no root directory was given on the command line
    /// or in the config file.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use clap::Parser;
    /// # use dirsum::config::FileConfig;
    /// # mod cli { include!("cli.rs"); }
    /// # use cli::Cli;
    /// let args = Cli::parse_from(&["dirsum", "--root", "/tmp", "--sort", "DESC"]);
    /// let scan = args.scan_config(&FileConfig::default()).unwrap();
    /// ```
    pub fn scan_config(&self, config: &FileConfig) -> Result<ScanConfig> {
        let Some(root) = self.root(config) else {
            bail!("missing required --root <PATH> (or set `root` in the config file)");
        };

        Ok(ScanConfig {
            root,
            direction: self.sort_direction(config),
        })
    }

    /// Extract scanning options from CLI args and config file.
    ///
    /// - **threads**: CLI > config > `0` (default)
    /// - **exclude**: merged from both sources (config values first, then CLI)
    ///
    /// # Errors
    ///
    /// Returns an error if any exclude pattern is not a valid glob.
    pub fn scan_options(&self, config: &FileConfig) -> Result<ScanOptions> {
        let mut patterns = config.scanning.exclude.clone().unwrap_or_default();
        patterns.extend(self.scanning.exclude.iter().cloned());

        let exclude = patterns
            .iter()
            .map(|p| Pattern::new(p).with_context(|| format!("Invalid exclude pattern {p:?}")))
            .collect::<Result<Vec<_>>>()?;

        Ok(ScanOptions {
            threads: self
                .scanning
                .threads
                .or(config.scanning.threads)
                .unwrap_or(0),
            exclude,
        })
    }
}
