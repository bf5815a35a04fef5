//! # dirsum
//!
//! List the entries of a directory together with their total sizes.
//!
//! Every immediate child of the root directory is measured concurrently:
//! files by their length, directories by recursively summing the files they
//! contain. The results are ranked by size and rendered as a table or as JSON.
//!
//! ## Usage
//!
//! ```bash
//! # Smallest entries first
//! dirsum --root ~/Downloads
//!
//! # Largest entries first, skipping VCS metadata
//! dirsum --root ~/Projects --sort DESC --exclude .git
//!
//! # Machine-readable output
//! dirsum --root /var/log --json
//! ```
//!
//! ## Library use
//!
//! ```no_run
//! # use std::path::Path;
//! use dirsum::{Collector, ScanOptions, SortDirection, rank};
//!
//! let collection = Collector::new(ScanOptions::default()).collect(Path::new("."))?;
//! for entry in rank(&collection.properties, SortDirection::Descending) {
//!     println!("{entry}");
//! }
//! # Ok::<(), dirsum::ScanError>(())
//! ```

pub mod collector;
pub mod config;
pub mod entry;
pub mod error;
pub mod output;
pub mod ranking;
pub mod report;
pub mod utils;

pub use collector::{Collection, Collector};
pub use config::{ScanConfig, ScanOptions, SortDirection};
pub use entry::{EntryKind, FileProperty, RankedEntry};
pub use error::{EntryError, EntryErrorKind, ScanError};
pub use ranking::rank;
pub use report::Report;
