//! Splitting, placeholder insertion, and reassembly of year blocks.

use chronos_calendar::{is_leap_block, leap_block_count};
use rand::Rng;

use crate::config::InsertConfig;
use crate::error::InsertError;

/// Length of a series of `n_blocks` year blocks after insertion:
/// `block_len` records per block plus one placeholder per leap block.
pub fn extended_len(block_len: usize, n_blocks: usize) -> usize {
    block_len * n_blocks + leap_block_count(n_blocks)
}

/// Inserts one placeholder record into every leap year block.
///
/// The series is split into consecutive year blocks of exactly
/// `config.block_len()` records. Each leap block (zero-based index
/// divisible by 4, block 0 included) receives the placeholder at a
/// position drawn uniformly from `1..=block_len` — a stand-in for the
/// uncomputed February 29 value, not a calendar-accurate placement.
/// Non-leap blocks pass through unchanged, and blocks are reassembled in
/// their original order.
///
/// An empty series is a no-op and returns an empty vector. The operation
/// is deliberately not idempotent: re-running inserts again at a fresh
/// random position, which is why a length that looks already extended is
/// refused.
///
/// # Errors
///
/// - [`InsertError::AlreadyExtended`] if the length is not a multiple of
///   the block length but matches [`extended_len`] for some block count.
/// - [`InsertError::MalformedInput`] for any other non-multiple length;
///   no partial output is produced.
pub fn insert_leap_days(
    records: &[String],
    config: &InsertConfig,
    rng: &mut impl Rng,
) -> Result<Vec<String>, InsertError> {
    if records.is_empty() {
        return Ok(Vec::new());
    }
    let block_len = config.block_len();
    let n_records = records.len();
    let remainder = n_records % block_len;
    if remainder != 0 {
        let n_years = n_records / block_len;
        if n_years >= 1 && n_records == extended_len(block_len, n_years) {
            return Err(InsertError::AlreadyExtended { n_years });
        }
        return Err(InsertError::MalformedInput {
            n_records,
            block_len,
            remainder,
        });
    }

    let n_blocks = n_records / block_len;
    let mut out = Vec::with_capacity(extended_len(block_len, n_blocks));
    for (index, block) in records.chunks(block_len).enumerate() {
        if is_leap_block(index) {
            // Position N in 1..=block_len: the placeholder lands after
            // the N-th existing record (N = block_len appends at the
            // block's end).
            let position = rng.random_range(1..=block_len);
            out.extend_from_slice(&block[..position]);
            out.push(config.placeholder().to_owned());
            out.extend_from_slice(&block[position..]);
        } else {
            out.extend_from_slice(block);
        }
    }
    Ok(out)
}
