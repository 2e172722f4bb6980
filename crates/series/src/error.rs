//! Error types for chronos-series.

use std::path::PathBuf;

/// Error type for all fallible operations in the chronos-series crate.
///
/// Covers missing files, underlying I/O failures, and the structural
/// problems found during column extraction and column-wise pasting.
#[derive(Debug, thiserror::Error)]
pub enum SeriesError {
    /// Returned when a required file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Wraps an underlying I/O failure, keeping the path it occurred on.
    #[error("i/o error on {}: {source}", path.display())]
    Io {
        /// Path being read or written when the failure occurred.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Returned when a column number is 0; columns are 1-based like awk's.
    #[error("invalid column number: 0 (columns are 1-based)")]
    InvalidColumn,

    /// Returned when a record has too few whitespace-separated fields for
    /// the requested column.
    #[error("line {line}: column {column} out of range (record has {n_columns} field(s))")]
    ColumnOutOfRange {
        /// 1-based line number of the offending record.
        line: usize,
        /// The 1-based column that was requested.
        column: usize,
        /// Number of fields the record actually has.
        n_columns: usize,
    },

    /// Returned when pasted inputs do not all have the same record count.
    #[error("input {index} has {got} record(s), expected {expected}")]
    LengthMismatch {
        /// 0-based index of the offending input.
        index: usize,
        /// Record count of input 0, which sets the expectation.
        expected: usize,
        /// Record count of the offending input.
        got: usize,
    },

    /// Returned when paste is called with no inputs at all.
    #[error("paste requires at least one input")]
    EmptyPaste,
}
