//! Atomic record file writing.

use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::SeriesError;

/// Writes records to `path`, one per line, atomically.
///
/// Records are written to a tempfile in the destination's directory and
/// persisted over `path` in a single rename. If any step fails the
/// destination is left untouched; no partial output file is ever
/// visible.
///
/// # Errors
///
/// Returns [`SeriesError::Io`] for any failure while creating, writing,
/// or persisting the tempfile.
pub fn write_records(path: &Path, records: &[String]) -> Result<(), SeriesError> {
    let io_err = |source: std::io::Error| SeriesError::Io {
        path: path.to_path_buf(),
        source,
    };

    // The tempfile must live on the same filesystem as the destination
    // for the persist rename to succeed.
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(io_err)?;
    {
        let mut writer = BufWriter::new(tmp.as_file_mut());
        for record in records {
            writeln!(writer, "{record}").map_err(io_err)?;
        }
        writer.flush().map_err(io_err)?;
    }
    tmp.persist(path).map_err(|e| io_err(e.error))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn writes_newline_terminated_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.dat");
        let records = vec!["3".to_string(), "nan".to_string(), "7".to_string()];
        write_records(&path, &records).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "3\nnan\n7\n");
    }

    #[test]
    fn empty_records_give_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.dat");
        write_records(&path, &[]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.dat");
        fs::write(&path, "old contents\n").unwrap();
        write_records(&path, &["new".to_string()]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "new\n");
    }

    #[test]
    fn failure_leaves_no_output() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing_subdir").join("out.dat");
        let err = write_records(&path, &["x".to_string()]).unwrap_err();
        assert!(matches!(err, SeriesError::Io { .. }));
        assert!(!path.exists());
    }

    #[test]
    fn no_tempfile_left_behind() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.dat");
        write_records(&path, &["1".to_string()]).unwrap();
        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }
}
