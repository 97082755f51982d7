//! # Estimate Store
//!
//! Writes a rendered estimate to `estimate_YYYYMMDD_HHMMSS.txt`.
//!
//! ```text
//! output_dir ──┐
//!              ├──► output_dir/estimate_20240301_090507.txt
//! timestamp ───┘          │
//!                         ▼
//!              fs::write (open, write, close on every path)
//!                         │
//!              ├── Ok(path)
//!              └── Err(SaveError::Write { path, source })
//! ```
//!
//! A file saved within the same second as an earlier one replaces it.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use spray_core::report::estimate_filename;
use tracing::info;

use crate::error::SaveError;

/// Saves `contents` under a timestamped name in `dir`.
///
/// An empty `dir` means the current working directory.
pub fn save_estimate(
    dir: &Path,
    timestamp: NaiveDateTime,
    contents: &str,
) -> Result<PathBuf, SaveError> {
    let path = dir.join(estimate_filename(timestamp));

    fs::write(&path, contents).map_err(|source| SaveError::Write {
        path: path.clone(),
        source,
    })?;

    info!(path = %path.display(), bytes = contents.len(), "Estimate saved");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(9, 5, 7)
            .unwrap()
    }

    #[test]
    fn test_save_writes_timestamped_file() {
        let dir = TempDir::new().unwrap();
        let path = save_estimate(dir.path(), at(), "TOTAL ESTIMATE: $1.00\n").unwrap();

        assert_eq!(path, dir.path().join("estimate_20240301_090507.txt"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "TOTAL ESTIMATE: $1.00\n");
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("no-such-dir");

        let err = save_estimate(&missing, at(), "x").unwrap_err();
        let SaveError::Write { path, .. } = &err;
        assert_eq!(path, &missing.join("estimate_20240301_090507.txt"));
        assert!(err.to_string().starts_with("could not write "));
    }

    #[test]
    fn test_empty_dir_is_bare_filename() {
        assert_eq!(
            Path::new("").join(estimate_filename(at())),
            PathBuf::from("estimate_20240301_090507.txt")
        );
    }

    #[test]
    fn test_same_second_overwrites() {
        let dir = TempDir::new().unwrap();
        save_estimate(dir.path(), at(), "first").unwrap();
        let path = save_estimate(dir.path(), at(), "second").unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "second");
    }
}
