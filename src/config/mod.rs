//! Configuration for scanning and reporting.
//!
//! - [`ScanOptions`] - How entries are measured (threads, exclusions)
//! - [`ScanConfig`] - The validated root and sort direction for one run
//! - [`SortDirection`] - Ascending or descending by size
//! - [`FileConfig`] - Defaults loaded from the configuration file

pub mod file;
pub mod scan;
pub mod sort;

pub use file::FileConfig;
pub use scan::{ScanConfig, ScanOptions};
pub use sort::SortDirection;
