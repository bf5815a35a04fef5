//! Entry ranking functionality.
//!
//! This module turns the measured entries of a directory into the ordered
//! sequence shown in the report.

use std::{cmp::Ordering, collections::BTreeMap};

use crate::{
    config::SortDirection,
    entry::{FileProperty, RankedEntry},
};

/// Order measured entries by size.
///
/// Entries are sorted by `size` in the requested direction. Entries of equal
/// size are always ordered by name, ascending, in both directions, so the
/// output is fully deterministic.
///
/// # Arguments
///
/// * `properties` - Measured entries keyed by name
/// * `direction` - Whether the smallest or the largest entries come first
///
/// # Examples
///
/// ```no_run
/// # use std::collections::BTreeMap;
/// # use dirsum::{config::SortDirection, entry::FileProperty, ranking::rank};
/// let mut properties = BTreeMap::new();
/// properties.insert("big".to_string(), FileProperty::file(2048));
/// properties.insert("small".to_string(), FileProperty::file(10));
///
/// let ranked = rank(&properties, SortDirection::Descending);
/// assert_eq!(ranked[0].name, "big");
/// ```
#[must_use]
pub fn rank(
    properties: &BTreeMap<String, FileProperty>,
    direction: SortDirection,
) -> Vec<RankedEntry> {
    let mut ranked: Vec<RankedEntry> = properties
        .iter()
        .map(|(name, property)| RankedEntry::new(name.clone(), *property))
        .collect();

    ranked.sort_by(|a, b| compare(a, b, direction));
    ranked
}

/// Compare two entries by size in `direction`, then by name.
fn compare(a: &RankedEntry, b: &RankedEntry, direction: SortDirection) -> Ordering {
    let by_size = a.property.size.cmp(&b.property.size);
    let by_size = match direction {
        SortDirection::Ascending => by_size,
        SortDirection::Descending => by_size.reverse(),
    };

    by_size.then_with(|| a.name.cmp(&b.name))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper to build a property map from `(name, property)` pairs.
    fn properties(entries: &[(&str, FileProperty)]) -> BTreeMap<String, FileProperty> {
        entries
            .iter()
            .map(|(name, property)| ((*name).to_string(), *property))
            .collect()
    }

    fn names(ranked: &[RankedEntry]) -> Vec<&str> {
        ranked.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_rank_ascending() {
        let map = properties(&[
            ("sub", FileProperty::directory(5000)),
            ("a.txt", FileProperty::file(10)),
            ("b.txt", FileProperty::file(2048)),
        ]);

        let ranked = rank(&map, SortDirection::Ascending);
        assert_eq!(names(&ranked), vec!["a.txt", "b.txt", "sub"]);
        assert_eq!(ranked[2].property, FileProperty::directory(5000));
    }

    #[test]
    fn test_rank_descending() {
        let map = properties(&[
            ("a.txt", FileProperty::file(10)),
            ("sub", FileProperty::directory(5000)),
            ("b.txt", FileProperty::file(2048)),
        ]);

        let ranked = rank(&map, SortDirection::Descending);
        assert_eq!(names(&ranked), vec!["sub", "b.txt", "a.txt"]);
    }

    #[test]
    fn test_rank_descending_is_reverse_of_ascending() {
        let map = properties(&[
            ("one", FileProperty::file(1)),
            ("two", FileProperty::file(22)),
            ("three", FileProperty::directory(333)),
            ("four", FileProperty::file(4444)),
            ("five", FileProperty::directory(55555)),
        ]);

        let mut ascending = rank(&map, SortDirection::Ascending);
        ascending.reverse();

        assert_eq!(ascending, rank(&map, SortDirection::Descending));
    }

    #[test]
    fn test_rank_ties_broken_by_name() {
        let map = properties(&[
            ("zeta", FileProperty::file(100)),
            ("alpha", FileProperty::file(100)),
            ("mid", FileProperty::directory(100)),
            ("tiny", FileProperty::file(1)),
        ]);

        assert_eq!(
            names(&rank(&map, SortDirection::Ascending)),
            vec!["tiny", "alpha", "mid", "zeta"]
        );
        assert_eq!(
            names(&rank(&map, SortDirection::Descending)),
            vec!["alpha", "mid", "zeta", "tiny"]
        );
    }

    #[test]
    fn test_rank_empty() {
        assert!(rank(&BTreeMap::new(), SortDirection::Ascending).is_empty());
    }

    #[test]
    fn test_rank_single_element() {
        let map = properties(&[("only", FileProperty::file(7))]);
        let ranked = rank(&map, SortDirection::Descending);

        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].name, "only");
    }
}
