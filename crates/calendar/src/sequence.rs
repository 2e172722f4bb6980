//! Date-vector generation for a span of whole years.

use crate::date::Calendar;
use crate::error::CalendarError;

/// One day of a date vector: a `YYYY MM DD` stamp.
///
/// Ordering is chronological. `Display` renders the exact column layout
/// the classifier tooling expects (`1960 01 01`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DateStamp {
    year: i32,
    month: u8,
    day: u8,
}

impl DateStamp {
    /// Creates a stamp after validating month and day under `calendar`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] or
    /// [`CalendarError::InvalidDay`] for out-of-range components.
    pub fn new(calendar: Calendar, year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        let max_day = calendar.days_in_month(year, month)?;
        if !(1..=max_day).contains(&day) {
            return Err(CalendarError::InvalidDay {
                day,
                month,
                year,
                max_day,
            });
        }
        Ok(Self { year, month, day })
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month.
    pub fn day(self) -> u8 {
        self.day
    }
}

impl std::fmt::Display for DateStamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {:02} {:02}", self.year, self.month, self.day)
    }
}

/// Generates every day from January 1 of `start_year` through December 31
/// of `end_year` inclusive, under the given calendar convention.
///
/// Under [`Calendar::Gregorian`] leap years contribute 366 stamps; under
/// [`Calendar::NoLeap`] every year contributes exactly 365.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidYearRange`] if `end_year < start_year`.
pub fn date_range(
    calendar: Calendar,
    start_year: i32,
    end_year: i32,
) -> Result<Vec<DateStamp>, CalendarError> {
    if end_year < start_year {
        return Err(CalendarError::InvalidYearRange {
            start: start_year,
            end: end_year,
        });
    }
    let n_years = (end_year - start_year + 1) as usize;
    let mut stamps = Vec::with_capacity(n_years * 366);
    for year in start_year..=end_year {
        for month in 1..=12u8 {
            // Safety: month is always in 1..=12 inside this loop.
            let max_day = calendar
                .days_in_month(year, month)
                .expect("month in 1..=12 is always valid");
            for day in 1..=max_day {
                stamps.push(DateStamp { year, month, day });
            }
        }
    }
    Ok(stamps)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stamp_display_padding() {
        let stamp = DateStamp::new(Calendar::Gregorian, 1960, 1, 5).unwrap();
        assert_eq!(stamp.to_string(), "1960 01 05");
        let stamp = DateStamp::new(Calendar::Gregorian, 2099, 12, 31).unwrap();
        assert_eq!(stamp.to_string(), "2099 12 31");
    }

    #[test]
    fn stamp_feb_29_validity() {
        assert!(DateStamp::new(Calendar::Gregorian, 1960, 2, 29).is_ok());
        assert_eq!(
            DateStamp::new(Calendar::NoLeap, 1960, 2, 29).unwrap_err(),
            CalendarError::InvalidDay {
                day: 29,
                month: 2,
                year: 1960,
                max_day: 28,
            }
        );
    }

    #[test]
    fn stamp_ordering() {
        let a = DateStamp::new(Calendar::NoLeap, 1960, 12, 31).unwrap();
        let b = DateStamp::new(Calendar::NoLeap, 1961, 1, 1).unwrap();
        assert!(a < b);
    }

    #[test]
    fn single_noleap_year() {
        let stamps = date_range(Calendar::NoLeap, 2000, 2000).unwrap();
        assert_eq!(stamps.len(), 365);
        assert_eq!(stamps[0].to_string(), "2000 01 01");
        assert_eq!(stamps[59].to_string(), "2000 03 01"); // day after Feb 28
        assert_eq!(stamps[364].to_string(), "2000 12 31");
    }

    #[test]
    fn single_gregorian_leap_year() {
        let stamps = date_range(Calendar::Gregorian, 2000, 2000).unwrap();
        assert_eq!(stamps.len(), 366);
        assert_eq!(stamps[59].to_string(), "2000 02 29");
        assert_eq!(stamps[60].to_string(), "2000 03 01");
    }

    #[test]
    fn multi_year_span_length() {
        // 1960..=1963: one leap year (1960).
        let stamps = date_range(Calendar::Gregorian, 1960, 1963).unwrap();
        assert_eq!(stamps.len(), 366 + 3 * 365);
        // Year boundary is continuous.
        let dec31 = stamps.iter().position(|s| s.to_string() == "1960 12 31");
        assert_eq!(dec31, Some(365));
        assert_eq!(stamps[366].to_string(), "1961 01 01");
    }

    #[test]
    fn reversed_range_rejected() {
        assert_eq!(
            date_range(Calendar::Gregorian, 2000, 1999).unwrap_err(),
            CalendarError::InvalidYearRange {
                start: 2000,
                end: 1999,
            }
        );
    }

    #[test]
    fn stamps_strictly_increasing() {
        let stamps = date_range(Calendar::Gregorian, 1999, 2001).unwrap();
        for w in stamps.windows(2) {
            assert!(w[0] < w[1], "{} !< {}", w[0], w[1]);
        }
    }
}
