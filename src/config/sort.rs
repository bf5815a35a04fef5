//! Sorting configuration for the report.
//!
//! This module defines the direction in which entries are ordered by size.

use clap::ValueEnum;
use serde::Serialize;

/// Direction in which entries are ordered by size.
///
/// On the command line and in the config file the directions are spelled
/// `ASK` (ascending) and `DESC` (descending), matched case-insensitively.
#[derive(Clone, Copy, PartialEq, Eq, Debug, ValueEnum, Default, Serialize)]
pub enum SortDirection {
    /// Smallest entries first
    #[default]
    #[value(name = "ASK")]
    #[serde(rename = "ASK")]
    Ascending,

    /// Largest entries first
    #[value(name = "DESC")]
    #[serde(rename = "DESC")]
    Descending,
}

impl SortDirection {
    /// Parse a direction token (`ASK` or `DESC`, any case).
    ///
    /// Returns `None` for anything else.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        <Self as ValueEnum>::from_str(token.trim(), true).ok()
    }

    /// The command-line token for this direction.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Ascending => "ASK",
            Self::Descending => "DESC",
        }
    }
}
