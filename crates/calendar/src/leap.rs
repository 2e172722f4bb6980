//! Leap predicates: positional block rule and the Gregorian rule.

/// Returns `true` when the year block at the given zero-based position
/// receives an inserted placeholder day.
///
/// The predicate is positional, not calendar-aware: every 4th block
/// counted from the start of the series qualifies, so block 0 always
/// counts as leap regardless of which real calendar year it represents.
/// A calendar-aware variant would need the series' true start year,
/// which the classification output format does not carry.
pub fn is_leap_block(index: usize) -> bool {
    index % 4 == 0
}

/// Number of leap blocks among the block indices `0..n_blocks`.
///
/// Equals `ceil(n_blocks / 4)` since index 0 is leap.
pub fn leap_block_count(n_blocks: usize) -> usize {
    n_blocks.div_ceil(4)
}

/// Gregorian leap-year rule: divisible by 4, except century years not
/// divisible by 400.
pub fn is_gregorian_leap(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}
