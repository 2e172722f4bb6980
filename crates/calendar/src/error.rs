//! Error types for the chronos-calendar crate.

/// Error type for all fallible operations in the chronos-calendar crate.
///
/// Covers validation failures for month numbers, day-within-month values,
/// and year ranges passed to the date sequence generators.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a day number exceeds the number of days in the given
    /// month of the given year.
    #[error("invalid day: {day} for year {year} month {month} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u8,
        /// The month for which the day is invalid.
        month: u8,
        /// The year the month belongs to (February's length depends on it).
        year: i32,
        /// The maximum valid day for the given month and year.
        max_day: u8,
    },

    /// Returned when a date range ends before it starts.
    #[error("invalid year range: {start}..={end} (end before start)")]
    InvalidYearRange {
        /// First year of the requested range.
        start: i32,
        /// Last year of the requested range.
        end: i32,
    },
}
