//! Utility functions and helpers.
//!
//! This module contains the size measurement and formatting helpers shared by
//! the collector and the report.

pub mod size;

pub use size::{compute_dir_size, format_size};
