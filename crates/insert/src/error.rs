//! Error types for chronos-insert.

/// Error type for all fallible operations in the chronos-insert crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InsertError {
    /// Returned when the series length is not a multiple of the block
    /// length, so a fixed-size split would leave a short trailing block.
    #[error(
        "series of {n_records} record(s) is not a multiple of {block_len}: \
         trailing block would have {remainder} record(s)"
    )]
    MalformedInput {
        /// Total record count of the offending series.
        n_records: usize,
        /// Configured year-block length.
        block_len: usize,
        /// Length of the short trailing block.
        remainder: usize,
    },

    /// Returned when the series length matches a previously extended
    /// series (`block_len * k + ceil(k / 4)` records for some `k`),
    /// guarding against inserting placeholders twice.
    #[error(
        "series length matches an already-extended series of {n_years} year(s); \
         refusing to insert leap days twice"
    )]
    AlreadyExtended {
        /// Number of year blocks the extended length corresponds to.
        n_years: usize,
    },
}
