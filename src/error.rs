//! Error types for directory scanning.
//!
//! Only [`ScanError`] aborts a scan. Failures confined to a single child of
//! the root are reported as [`EntryError`] values inside the scan result so
//! the remaining entries can still be listed.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Fatal error that prevents any entry from being measured.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The root directory does not exist, is not a directory, or cannot be listed.
    #[error("cannot read directory {}: {source}", .path.display())]
    RootUnreadable {
        /// Root path as given by the caller
        path: PathBuf,

        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The dedicated worker pool requested with `threads` could not be built.
    #[error("cannot start worker threads: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Reason a single entry could not be measured.
#[derive(Debug, Error)]
pub enum EntryErrorKind {
    /// The entry itself could not be stat'ed (removed mid-scan, broken symlink, ...).
    #[error("cannot stat entry: {0}")]
    Stat(#[source] io::Error),

    /// Walking the entry's subtree failed part-way through.
    #[error("cannot measure directory: {0}")]
    Traversal(#[source] walkdir::Error),

    /// The root listing yielded an error instead of a child.
    #[error("cannot read directory entry: {0}")]
    Listing(#[source] io::Error),

    /// Another entry already uses this display name.
    #[error("name clashes with another entry")]
    DuplicateName,
}

/// A child of the root that was left out of the result.
#[derive(Debug, Error)]
#[error("{name}: {kind}")]
pub struct EntryError {
    /// Entry name within the root directory
    pub name: String,

    /// What went wrong
    #[source]
    pub kind: EntryErrorKind,
}

impl EntryError {
    /// Create an entry error for `name`.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: EntryErrorKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_unreadable_message_includes_path() {
        let err = ScanError::RootUnreadable {
            path: PathBuf::from("/no/such/dir"),
            source: io::Error::from(io::ErrorKind::NotFound),
        };

        let message = err.to_string();
        assert!(message.starts_with("cannot read directory /no/such/dir: "));
    }

    #[test]
    fn test_entry_error_message_names_entry() {
        let err = EntryError::new(
            "gone.txt",
            EntryErrorKind::Stat(io::Error::from(io::ErrorKind::NotFound)),
        );

        assert!(err.to_string().starts_with("gone.txt: cannot stat entry: "));
    }

    #[test]
    fn test_listing_error_message() {
        let err = EntryError::new(
            "<listing>",
            EntryErrorKind::Listing(io::Error::from(io::ErrorKind::PermissionDenied)),
        );

        assert!(
            err.to_string()
                .starts_with("<listing>: cannot read directory entry: ")
        );
    }
}
