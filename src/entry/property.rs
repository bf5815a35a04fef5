//! Core entry data structures and types.
//!
//! This module defines the data structures used to describe the immediate
//! children of the scanned directory and their measured sizes.

use std::fmt::{Display, Formatter, Result};

use serde::Serialize;

/// Kind of a directory entry.
///
/// Anything that is not a directory after following a top-level symlink is
/// treated as a file and measured by its metadata length.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
pub enum EntryKind {
    /// Regular file (or any other non-directory entry)
    #[serde(rename = "file")]
    File,

    /// Directory, measured by recursively summing the files it contains
    #[serde(rename = "dir")]
    Directory,
}

impl EntryKind {
    /// Short label used in the report's Type column.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Directory => "dir",
        }
    }
}

impl Display for EntryKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.label())
    }
}

/// Measured properties of a single entry.
///
/// Created once per scan by the collector and never modified afterwards.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
pub struct FileProperty {
    /// Whether the entry is a file or a directory
    #[serde(rename = "type")]
    pub kind: EntryKind,

    /// Size in bytes
    ///
    /// For files this is the metadata length. For directories it is the sum
    /// of all regular files in the subtree; directory entries themselves
    /// contribute nothing.
    pub size: u64,
}

impl FileProperty {
    /// Properties of a file of `size` bytes.
    #[must_use]
    pub const fn file(size: u64) -> Self {
        Self {
            kind: EntryKind::File,
            size,
        }
    }

    /// Properties of a directory whose contents total `size` bytes.
    #[must_use]
    pub const fn directory(size: u64) -> Self {
        Self {
            kind: EntryKind::Directory,
            size,
        }
    }
}

/// An entry name paired with its properties, in report order.
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct RankedEntry {
    /// Entry name within the scanned directory
    pub name: String,

    /// Measured properties of the entry
    #[serde(flatten)]
    pub property: FileProperty,
}

impl RankedEntry {
    /// Create a ranked entry from a name and its properties.
    #[must_use]
    pub fn new(name: impl Into<String>, property: FileProperty) -> Self {
        Self {
            name: name.into(),
            property,
        }
    }
}

impl Display for RankedEntry {
    /// Formats as `name (type, size)`, e.g. `sub (dir, 4.88 Kb)`.
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "{} ({}, {})",
            self.name,
            self.property.kind,
            crate::utils::format_size(self.property.size)
        )
    }
}
