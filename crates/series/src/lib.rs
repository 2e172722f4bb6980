//! # chronos-series
//!
//! Line-based record I/O for daily classification series files. Bridges
//! plain-text files on disk into the `Vec<String>` record lists the rest
//! of chronos operates on, and back.
//!
//! File writes are atomic: records go to a tempfile in the destination
//! directory first and are persisted over the target in one rename, so a
//! failed run never leaves a partial output file behind.

mod error;
mod extract;
mod paste;
mod read;
mod write;

pub use error::SeriesError;
pub use extract::extract_column;
pub use paste::paste;
pub use read::read_records;
pub use write::write_records;
