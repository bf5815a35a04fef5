//! Scanning configuration for directory measurement.
//!
//! This module defines the options that control how the root directory is
//! listed and measured, and the validated request handed to the scan.

use std::path::PathBuf;

use glob::Pattern;

use super::SortDirection;

/// Configuration for scanning behavior.
#[derive(Clone, Debug, Default)]
pub struct ScanOptions {
    /// Number of threads to use for measuring entries (0 = default)
    pub threads: usize,

    /// Top-level entry names matching any of these patterns are skipped
    pub exclude: Vec<Pattern>,
}

impl ScanOptions {
    /// Whether an entry with this name should be left out of the scan.
    #[must_use]
    pub fn is_excluded(&self, name: &str) -> bool {
        self.exclude.iter().any(|pattern| pattern.matches(name))
    }
}

/// A validated request to list and rank one directory.
///
/// Built once from the command line and config file, then passed by value
/// into the scan.
#[derive(Clone, Debug)]
pub struct ScanConfig {
    /// Directory whose immediate entries are measured
    pub root: PathBuf,

    /// Order in which entries are reported
    pub direction: SortDirection,
}
