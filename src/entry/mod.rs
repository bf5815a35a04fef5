//! Directory entries and their measured sizes.
//!
//! - [`EntryKind`] - File or directory
//! - [`FileProperty`] - Kind and size of one entry
//! - [`RankedEntry`] - An entry name with its properties, in report order

pub mod property;

pub use property::{EntryKind, FileProperty, RankedEntry};
