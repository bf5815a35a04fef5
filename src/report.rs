//! Human-readable report rendering.
//!
//! A [`Report`] ranks the entries of a [`Collection`] and renders them as a
//! three-column table (Name, Type, Size). Entries that could not be measured
//! are listed separately on stderr.

use colored::Colorize;
use comfy_table::{Attribute, Cell, CellAlignment, Table, presets};

use crate::{
    collector::Collection,
    config::SortDirection,
    entry::RankedEntry,
    ranking::rank,
    utils::format_size,
};

/// One rendered line of the report.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ReportRow {
    /// Entry name
    pub name: String,

    /// `"file"` or `"dir"`
    pub kind: &'static str,

    /// Formatted size, e.g. `"4.88 Kb"`
    pub size_display: String,
}

impl From<&RankedEntry> for ReportRow {
    fn from(entry: &RankedEntry) -> Self {
        Self {
            name: entry.name.clone(),
            kind: entry.property.kind.label(),
            size_display: format_size(entry.property.size),
        }
    }
}

/// Ranked view over a completed collection.
#[derive(Debug)]
pub struct Report<'a> {
    collection: &'a Collection,
    direction: SortDirection,
    entries: Vec<RankedEntry>,
}

impl<'a> Report<'a> {
    /// Rank the entries of `collection` in `direction`.
    #[must_use]
    pub fn new(collection: &'a Collection, direction: SortDirection) -> Self {
        Self {
            collection,
            direction,
            entries: rank(&collection.properties, direction),
        }
    }

    /// The collection this report was built from.
    #[must_use]
    pub const fn collection(&self) -> &'a Collection {
        self.collection
    }

    /// Direction the entries are ordered in.
    #[must_use]
    pub const fn direction(&self) -> SortDirection {
        self.direction
    }

    /// Entries in report order.
    #[must_use]
    pub fn entries(&self) -> &[RankedEntry] {
        &self.entries
    }

    /// Entries as display rows, in report order.
    #[must_use]
    pub fn rows(&self) -> Vec<ReportRow> {
        self.entries.iter().map(ReportRow::from).collect()
    }

    /// Build the Name / Type / Size table.
    #[must_use]
    pub fn table(&self) -> Table {
        let mut table = Table::new();
        table.load_preset(presets::NOTHING);
        table.set_header(vec![
            Cell::new("Name").add_attribute(Attribute::Bold),
            Cell::new("Type").add_attribute(Attribute::Bold),
            Cell::new("Size").add_attribute(Attribute::Bold),
        ]);

        for row in self.rows() {
            table.add_row(vec![
                Cell::new(row.name),
                Cell::new(row.kind),
                Cell::new(row.size_display),
            ]);
        }

        if let Some(column) = table.column_mut(2) {
            column.set_cell_alignment(CellAlignment::Right);
        }

        table
    }

    /// Print the table to stdout and any per-entry failures to stderr.
    ///
    /// # Output Format
    ///
    /// ```text
    ///  Name   Type     Size
    ///  a.txt  file  10.00 B
    ///  b.txt  file  2.00 Kb
    ///  sub    dir   4.88 Kb
    ///
    ///   💾 Total: 6.89 Kb in 3 entries
    /// ```
    pub fn print(&self) {
        for failure in &self.collection.failures {
            eprintln!("{}", format!("Skipped {failure}").red());
        }

        println!("{}", self.table());
        println!(
            "\n  💾 Total: {} in {} entries",
            format_size(self.collection.total_size()).bright_green().bold(),
            self.entries.len().to_string().bright_white()
        );

        if self.collection.is_partial() {
            println!(
                "  ⚠️  {} entries could not be measured",
                self.collection.failures.len().to_string().yellow()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::FileProperty;
    use std::{collections::BTreeMap, path::PathBuf};

    fn sample_collection() -> Collection {
        let mut properties = BTreeMap::new();
        properties.insert("a.txt".to_string(), FileProperty::file(10));
        properties.insert("b.txt".to_string(), FileProperty::file(2048));
        properties.insert("sub".to_string(), FileProperty::directory(5000));

        Collection {
            root: PathBuf::from("root"),
            properties,
            failures: vec![],
        }
    }

    #[test]
    fn test_report_rows_ascending() {
        let collection = sample_collection();
        let report = Report::new(&collection, SortDirection::Ascending);

        let rows = report.rows();
        assert_eq!(
            rows,
            vec![
                ReportRow {
                    name: "a.txt".to_string(),
                    kind: "file",
                    size_display: "10.00 B".to_string(),
                },
                ReportRow {
                    name: "b.txt".to_string(),
                    kind: "file",
                    size_display: "2.00 Kb".to_string(),
                },
                ReportRow {
                    name: "sub".to_string(),
                    kind: "dir",
                    size_display: "4.88 Kb".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_report_descending_order() {
        let collection = sample_collection();
        let report = Report::new(&collection, SortDirection::Descending);

        let names: Vec<_> = report.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["sub", "b.txt", "a.txt"]);
        assert_eq!(report.direction(), SortDirection::Descending);
    }

    #[test]
    fn test_report_table_contains_header_and_rows() {
        let collection = sample_collection();
        let rendered = Report::new(&collection, SortDirection::Ascending)
            .table()
            .to_string();

        let lines: Vec<&str> = rendered
            .lines()
            .filter(|line| !line.trim().is_empty())
            .collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("Name"));
        assert!(lines[0].contains("Type"));
        assert!(lines[0].contains("Size"));
        assert!(lines[1].contains("a.txt") && lines[1].contains("10.00 B"));
        assert!(lines[3].contains("sub") && lines[3].contains("dir"));
        assert!(lines[3].contains("4.88 Kb"));
    }

    #[test]
    fn test_report_empty_collection() {
        let collection = Collection {
            root: PathBuf::from("empty"),
            properties: BTreeMap::new(),
            failures: vec![],
        };
        let report = Report::new(&collection, SortDirection::Ascending);

        assert!(report.entries().is_empty());
        let rendered = report.table().to_string();
        let lines: Vec<&str> = rendered
            .lines()
            .filter(|line| !line.trim().is_empty())
            .collect();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("Name"));
    }
}
