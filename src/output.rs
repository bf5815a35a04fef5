//! Structured JSON output for scripting and piping.
//!
//! When the `--json` flag is passed, these structures are serialized to
//! stdout as a single JSON object, replacing all human-readable output.

use serde::Serialize;

use crate::{
    config::SortDirection,
    entry::{EntryKind, RankedEntry},
    error::EntryError,
    report::Report,
    utils::format_size,
};

/// Top-level JSON output emitted when `--json` is active.
#[derive(Serialize, Debug)]
pub struct JsonOutput {
    /// Directory whose entries were listed.
    pub root: String,

    /// Sort direction (`"ASK"` or `"DESC"`).
    pub sort: SortDirection,

    /// Measured entries in report order.
    pub entries: Vec<JsonEntry>,

    /// Combined size of all measured entries in bytes.
    pub total_size: u64,

    /// Human-readable formatted total size.
    pub total_size_formatted: String,

    /// Entries that could not be measured.
    pub errors: Vec<JsonEntryError>,
}

/// A single measured entry in the JSON output.
#[derive(Serialize, Debug)]
pub struct JsonEntry {
    /// Entry name within the root directory.
    pub name: String,

    /// `"file"` or `"dir"`.
    #[serde(rename = "type")]
    pub kind: EntryKind,

    /// Size in bytes.
    pub size: u64,

    /// Human-readable formatted size (e.g. `"4.88 Kb"`).
    pub size_formatted: String,
}

/// An entry that was left out of the report.
#[derive(Serialize, Debug)]
pub struct JsonEntryError {
    /// Entry name within the root directory.
    pub name: String,

    /// Description of the failure.
    pub error: String,
}

impl JsonOutput {
    /// Build a `JsonOutput` from a ranked report.
    #[must_use]
    pub fn from_report(report: &Report<'_>) -> Self {
        let collection = report.collection();
        let total_size = collection.total_size();

        Self {
            root: collection.root.display().to_string(),
            sort: report.direction(),
            entries: report.entries().iter().map(JsonEntry::from_entry).collect(),
            total_size,
            total_size_formatted: format_size(total_size),
            errors: collection
                .failures
                .iter()
                .map(JsonEntryError::from_error)
                .collect(),
        }
    }
}

impl JsonEntry {
    /// Convert a `RankedEntry` into a `JsonEntry`.
    #[must_use]
    pub fn from_entry(entry: &RankedEntry) -> Self {
        Self {
            name: entry.name.clone(),
            kind: entry.property.kind,
            size: entry.property.size,
            size_formatted: format_size(entry.property.size),
        }
    }
}

impl JsonEntryError {
    /// Convert an `EntryError` into a `JsonEntryError`.
    #[must_use]
    pub fn from_error(error: &EntryError) -> Self {
        Self {
            name: error.name.clone(),
            error: error.kind.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{collector::Collection, entry::FileProperty, error::EntryErrorKind};
    use std::{collections::BTreeMap, io, path::PathBuf};

    fn sample_collection() -> Collection {
        let mut properties = BTreeMap::new();
        properties.insert("a.txt".to_string(), FileProperty::file(10));
        properties.insert("sub".to_string(), FileProperty::directory(5000));

        Collection {
            root: PathBuf::from("root"),
            properties,
            failures: vec![EntryError::new(
                "locked",
                EntryErrorKind::Stat(io::Error::from(io::ErrorKind::PermissionDenied)),
            )],
        }
    }

    #[test]
    fn test_json_output_from_report() {
        let collection = sample_collection();
        let report = Report::new(&collection, SortDirection::Descending);
        let output = JsonOutput::from_report(&report);

        assert_eq!(output.root, "root");
        assert_eq!(output.sort, SortDirection::Descending);
        assert_eq!(output.entries.len(), 2);
        assert_eq!(output.entries[0].name, "sub");
        assert_eq!(output.entries[0].size_formatted, "4.88 Kb");
        assert_eq!(output.total_size, 5010);
        assert_eq!(output.errors.len(), 1);
        assert_eq!(output.errors[0].name, "locked");
    }

    #[test]
    fn test_json_output_serialization() {
        let collection = sample_collection();
        let report = Report::new(&collection, SortDirection::Ascending);
        let value = serde_json::to_value(JsonOutput::from_report(&report)).unwrap();

        assert_eq!(value["sort"], "ASK");
        assert_eq!(value["entries"][0]["name"], "a.txt");
        assert_eq!(value["entries"][0]["type"], "file");
        assert_eq!(value["entries"][0]["size"], 10);
        assert_eq!(value["entries"][0]["size_formatted"], "10.00 B");
        assert_eq!(value["entries"][1]["type"], "dir");
        assert_eq!(value["total_size_formatted"], "4.89 Kb");
        assert!(
            value["errors"][0]["error"]
                .as_str()
                .unwrap()
                .starts_with("cannot stat entry")
        );
    }
}
