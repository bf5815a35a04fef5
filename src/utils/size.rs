//! Size measurement and formatting utilities.
//!
//! This module provides the recursive directory walker used to measure
//! subdirectories, and the formatter that turns byte counts into the
//! human-readable strings shown in the report.

use std::path::Path;

use walkdir::WalkDir;

/// Unit labels used above the plain byte range, indexed by the number of
/// times the value was divided by 1024.
const UNITS: [&str; 5] = ["b", "Kb", "Mb", "Gb", "Tb"];

/// Calculate the total size of a directory and all its contents, in bytes.
///
/// Recursively traverses the directory tree using `walkdir` and sums the sizes
/// of all regular files found. Directories themselves contribute nothing, and
/// symbolic links below `path` are not followed.
///
/// # Arguments
///
/// * `path` - Directory to measure
///
/// # Errors
///
/// Returns the first `walkdir::Error` encountered. Any entry that cannot be
/// read or stat'ed aborts the whole walk; no partial total is returned.
///
/// # Examples
///
/// ```no_run
/// # use std::path::Path;
/// # use dirsum::utils::compute_dir_size;
/// let bytes = compute_dir_size(Path::new("/tmp"))?;
/// # Ok::<(), walkdir::Error>(())
/// ```
pub fn compute_dir_size(path: &Path) -> Result<u64, walkdir::Error> {
    let mut total = 0u64;

    for entry in WalkDir::new(path).follow_links(false) {
        let entry = entry?;

        if entry.file_type().is_file() {
            total = total.saturating_add(entry.metadata()?.len());
        }
    }

    Ok(total)
}

/// Format a byte count as a human-readable string using 1024-based units.
///
/// Values below 1024 are shown in bytes (`"10.00 B"`). Larger values are
/// divided by 1024 until they drop below 1024 or the largest unit (`Tb`) is
/// reached, then printed with two decimals (`"2.00 Kb"`, `"4.88 Kb"`).
///
/// # Examples
///
/// ```
/// # use dirsum::utils::format_size;
/// assert_eq!(format_size(10), "10.00 B");
/// assert_eq!(format_size(2048), "2.00 Kb");
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_size(size: u64) -> String {
    let mut value = size as f64;

    if value < 1024.0 {
        return format!("{value:.2} B");
    }

    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    format!("{value:.2} {}", UNITS[unit])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_format_size_bytes() {
        assert_eq!(format_size(0), "0.00 B");
        assert_eq!(format_size(10), "10.00 B");
        assert_eq!(format_size(1023), "1023.00 B");
    }

    #[test]
    fn test_format_size_unit_boundaries() {
        assert_eq!(format_size(1024), "1.00 Kb");
        assert_eq!(format_size(1024 * 1024), "1.00 Mb");
        assert_eq!(format_size(1024 * 1024 * 1024), "1.00 Gb");
        assert_eq!(format_size(1024u64.pow(4)), "1.00 Tb");
    }

    #[test]
    fn test_format_size_fractional() {
        assert_eq!(format_size(2048), "2.00 Kb");
        assert_eq!(format_size(5000), "4.88 Kb"); // 5000 / 1024 = 4.8828
        assert_eq!(format_size(1536), "1.50 Kb");
    }

    #[test]
    fn test_format_size_caps_at_terabytes() {
        assert_eq!(format_size(1024u64.pow(5)), "1024.00 Tb");
        assert!(format_size(u64::MAX).ends_with(" Tb"));
    }

    #[test]
    fn test_format_size_never_exceeds_largest_unit() {
        for shift in 0..64 {
            let formatted = format_size(1u64 << shift);
            let unit = formatted.rsplit(' ').next().unwrap();
            assert!(
                unit == "B" || UNITS.contains(&unit),
                "unexpected unit in {formatted}"
            );
        }
    }

    #[test]
    fn test_compute_dir_size_empty() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(compute_dir_size(tmp.path()).unwrap(), 0);
    }

    #[test]
    fn test_compute_dir_size_nonexistent() {
        let tmp = TempDir::new().unwrap();
        assert!(compute_dir_size(&tmp.path().join("missing")).is_err());
    }

    #[test]
    fn test_compute_dir_size_with_nested_files() {
        let tmp = TempDir::new().unwrap();
        let nested = tmp.path().join("a").join("b").join("c");
        fs::create_dir_all(&nested).unwrap();

        fs::write(tmp.path().join("top.bin"), vec![0u8; 100]).unwrap();
        fs::write(tmp.path().join("a").join("mid.bin"), vec![0u8; 250]).unwrap();
        fs::write(nested.join("deep.bin"), vec![0u8; 4096]).unwrap();

        assert_eq!(compute_dir_size(tmp.path()).unwrap(), 100 + 250 + 4096);
    }

    #[test]
    fn test_compute_dir_size_ignores_empty_directories() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("x").join("y")).unwrap();
        fs::create_dir_all(tmp.path().join("z")).unwrap();

        assert_eq!(compute_dir_size(tmp.path()).unwrap(), 0);
    }

    #[test]
    #[cfg(unix)]
    fn test_compute_dir_size_does_not_follow_symlinks() {
        let tmp = TempDir::new().unwrap();
        let outside = TempDir::new().unwrap();
        fs::write(outside.path().join("big.bin"), vec![0u8; 8192]).unwrap();
        fs::write(tmp.path().join("own.bin"), vec![0u8; 10]).unwrap();

        std::os::unix::fs::symlink(outside.path(), tmp.path().join("link")).unwrap();

        assert_eq!(compute_dir_size(tmp.path()).unwrap(), 10);
    }
}
