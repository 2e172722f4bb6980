//! # chronos-insert
//!
//! Extends a daily classification series from a 365-day no-leap model
//! calendar so it lines up with a Gregorian date vector: the series is
//! split into year blocks of 365 records, every 4th block (zero-based,
//! so block 0 included) gains one `nan` placeholder record at a uniformly
//! random position, and the blocks are concatenated back together.
//!
//! The insertion position is a placeholder choice, not a calendar-accurate
//! February 29 placement; see [`insert_leap_days`].
//!
//! # Quick start
//!
//! ```ignore
//! use chronos_insert::{InsertConfig, insert_leap_days};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let records: Vec<String> = std::iter::repeat_n("3".to_string(), 4 * 365).collect();
//! let config = InsertConfig::new();
//! let mut rng = StdRng::seed_from_u64(42);
//! let extended = insert_leap_days(&records, &config, &mut rng)?;
//! assert_eq!(extended.len(), 4 * 365 + 1); // only block 0 is leap
//! # Ok::<(), chronos_insert::InsertError>(())
//! ```

mod config;
mod error;
mod insert;

pub use config::InsertConfig;
pub use error::InsertError;
pub use insert::{extended_len, insert_leap_days};
