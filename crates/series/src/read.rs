//! Reading record files from disk.

use std::fs;
use std::path::Path;

use crate::error::SeriesError;

/// Reads a record file into one `String` per line.
///
/// Trailing whitespace-only lines are dropped: classifier output files
/// commonly end with one or more blank lines, and a fixed-size year
/// split would otherwise produce a spurious empty terminal block.
/// Interior lines are preserved verbatim, blank or not.
///
/// # Errors
///
/// Returns [`SeriesError::FileNotFound`] if `path` does not exist, or
/// [`SeriesError::Io`] for any other read failure.
pub fn read_records(path: &Path) -> Result<Vec<String>, SeriesError> {
    if !path.exists() {
        return Err(SeriesError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let contents = fs::read_to_string(path).map_err(|source| SeriesError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut records: Vec<String> = contents.lines().map(str::to_owned).collect();
    while records.last().is_some_and(|r| r.trim().is_empty()) {
        records.pop();
    }
    Ok(records)
}
