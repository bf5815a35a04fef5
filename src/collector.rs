//! Entry collection and size measurement.
//!
//! This module lists the immediate children of a directory and measures each
//! of them concurrently. Files are measured by their metadata length and
//! directories by recursively summing the files they contain. A failure on
//! one entry never aborts the others; only an unreadable root is fatal.

use std::{
    collections::{BTreeMap, BTreeSet},
    ffi::OsStr,
    fs,
    path::{Path, PathBuf},
    sync::{
        atomic::{AtomicUsize, Ordering},
        mpsc,
    },
    time::Duration,
};

use indicatif::{ProgressBar, ProgressStyle};
use rayon::ThreadPoolBuilder;

use crate::{
    config::ScanOptions,
    entry::FileProperty,
    error::{EntryError, EntryErrorKind, ScanError},
    utils::compute_dir_size,
};

/// Name recorded for errors the root listing yields in place of a child.
pub const LISTING_ENTRY: &str = "<listing>";

/// Result of measuring every entry of one directory.
#[derive(Debug)]
pub struct Collection {
    /// Directory that was listed
    pub root: PathBuf,

    /// Measured entries, keyed by name
    pub properties: BTreeMap<String, FileProperty>,

    /// Entries that could not be measured, sorted by name
    pub failures: Vec<EntryError>,
}

impl Collection {
    /// Combined size of all measured entries, in bytes.
    #[must_use]
    pub fn total_size(&self) -> u64 {
        self.properties
            .values()
            .fold(0u64, |acc, p| acc.saturating_add(p.size))
    }

    /// Whether at least one entry had to be left out.
    #[must_use]
    pub fn is_partial(&self) -> bool {
        !self.failures.is_empty()
    }
}

/// Measures the immediate entries of a directory.
///
/// Each entry is measured by its own task on a rayon scope. Tasks report
/// their result over a channel and the calling thread builds the map once
/// every task has finished, so no lock is shared between tasks.
#[derive(Debug)]
pub struct Collector {
    /// Configuration options for scanning behavior
    scan_options: ScanOptions,

    /// When `true`, suppresses the progress spinner (used by `--json` mode).
    quiet: bool,
}

impl Collector {
    /// Create a new collector with the specified options.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use dirsum::{collector::Collector, config::ScanOptions};
    /// let collector = Collector::new(ScanOptions::default());
    /// ```
    #[must_use]
    pub const fn new(scan_options: ScanOptions) -> Self {
        Self {
            scan_options,
            quiet: false,
        }
    }

    /// Enable or disable quiet mode (suppresses the progress spinner).
    #[must_use]
    pub const fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// List `root` and measure each of its immediate entries.
    ///
    /// Entries whose names match an exclude pattern are skipped. Every other
    /// entry ends up either in [`Collection::properties`] or in
    /// [`Collection::failures`].
    ///
    /// When `threads` is non-zero the entries are measured on a dedicated pool
    /// of that size; otherwise the global rayon pool is used.
    ///
    /// # Errors
    ///
    /// - [`ScanError::RootUnreadable`] if `root` does not exist, is not a
    ///   directory, or cannot be listed
    /// - [`ScanError::ThreadPool`] if the dedicated pool cannot be built
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use std::path::Path;
    /// # use dirsum::{collector::Collector, config::ScanOptions};
    /// let collection = Collector::new(ScanOptions::default()).collect(Path::new("."))?;
    /// println!("{} entries", collection.properties.len());
    /// # Ok::<(), dirsum::ScanError>(())
    /// ```
    pub fn collect(&self, root: &Path) -> Result<Collection, ScanError> {
        let listing = fs::read_dir(root).map_err(|source| ScanError::RootUnreadable {
            path: root.to_path_buf(),
            source,
        })?;

        let mut failures = Vec::new();
        let mut children = Vec::new();
        let mut seen = BTreeSet::new();

        for entry in listing {
            match entry {
                Ok(entry) => {
                    let name = entry_name(&entry.file_name());
                    if self.scan_options.is_excluded(&name) {
                        continue;
                    }
                    if !seen.insert(name.clone()) {
                        failures.push(EntryError::new(name, EntryErrorKind::DuplicateName));
                        continue;
                    }
                    children.push((name, entry.path()));
                }
                Err(e) => failures.push(EntryError::new(
                    LISTING_ENTRY,
                    EntryErrorKind::Listing(e),
                )),
            }
        }

        let results = if self.scan_options.threads > 0 {
            ThreadPoolBuilder::new()
                .num_threads(self.scan_options.threads)
                .build()?
                .install(|| self.measure_all(children))
        } else {
            self.measure_all(children)
        };

        let mut properties = BTreeMap::new();
        for (name, result) in results {
            match result {
                Ok(property) => {
                    properties.insert(name, property);
                }
                Err(kind) => failures.push(EntryError::new(name, kind)),
            }
        }
        failures.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(Collection {
            root: root.to_path_buf(),
            properties,
            failures,
        })
    }

    /// Measure every child on its own task and wait for all of them.
    ///
    /// Results arrive in completion order; the channel is drained only after
    /// the scope has joined every task.
    fn measure_all(
        &self,
        children: Vec<(String, PathBuf)>,
    ) -> Vec<(String, Result<FileProperty, EntryErrorKind>)> {
        let progress = self.progress_bar();
        let measured = AtomicUsize::new(0);
        let (tx, rx) = mpsc::channel();

        rayon::scope(|scope| {
            for (name, path) in children {
                let tx = tx.clone();
                let progress = &progress;
                let measured = &measured;

                scope.spawn(move |_| {
                    let result = measure_entry(&path);

                    let n = measured.fetch_add(1, Ordering::Relaxed) + 1;
                    progress.set_message(format!("Measuring... {n} entries"));

                    // The receiver outlives the scope, so this cannot fail.
                    tx.send((name, result)).ok();
                });
            }
        });
        drop(tx);

        progress.finish_and_clear();

        rx.into_iter().collect()
    }

    /// Spinner shown while entries are measured, hidden in quiet mode.
    fn progress_bar(&self) -> ProgressBar {
        if self.quiet {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message("Measuring...");
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    }
}

/// Measure a single entry of the root directory.
///
/// The entry is stat'ed with symlinks followed, so a link to a directory is
/// measured as that directory. Anything that is not a directory is reported
/// as a file of its metadata length.
fn measure_entry(path: &Path) -> Result<FileProperty, EntryErrorKind> {
    let metadata = fs::metadata(path).map_err(EntryErrorKind::Stat)?;

    if metadata.is_dir() {
        measure_directory(path)
    } else {
        Ok(FileProperty::file(metadata.len()))
    }
}

/// Sum the regular files below `path`; any walk error drops the whole entry.
fn measure_directory(path: &Path) -> Result<FileProperty, EntryErrorKind> {
    compute_dir_size(path)
        .map(FileProperty::directory)
        .map_err(EntryErrorKind::Traversal)
}

/// Display name for a directory entry.
///
/// Valid UTF-8 is kept as is. Anything else is rendered with its raw bytes
/// escaped (`a\xff`), so two distinct names never map to the same key.
fn entry_name(name: &OsStr) -> String {
    name.to_str().map_or_else(
        || name.as_encoded_bytes().escape_ascii().to_string(),
        str::to_owned,
    )
}
