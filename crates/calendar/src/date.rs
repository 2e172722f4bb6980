//! Calendar conventions and month-length arithmetic.

use crate::error::CalendarError;
use crate::leap::is_gregorian_leap;

/// Number of days in each month of a common year (index 0 unused,
/// index 1 = January, ..., index 12 = December).
pub(crate) const DAYS_PER_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Calendar convention a date sequence is generated under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Calendar {
    /// Real-world Gregorian calendar with leap Februaries. Used for the
    /// date vector that extended series are pasted against.
    #[default]
    Gregorian,
    /// 365-day model calendar; February always has 28 days.
    NoLeap,
}

impl Calendar {
    /// Number of days in `month` of `year` under this calendar.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12.
    pub fn days_in_month(self, year: i32, month: u8) -> Result<u8, CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth { month });
        }
        let base = DAYS_PER_MONTH[month as usize];
        let leap_feb = month == 2 && self == Calendar::Gregorian && is_gregorian_leap(year);
        Ok(if leap_feb { base + 1 } else { base })
    }

    /// Number of days in `year` under this calendar (365 or 366).
    pub fn days_in_year(self, year: i32) -> u16 {
        match self {
            Calendar::Gregorian if is_gregorian_leap(year) => 366,
            _ => 365,
        }
    }
}

impl std::fmt::Display for Calendar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Calendar::Gregorian => write!(f, "gregorian"),
            Calendar::NoLeap => write!(f, "noleap"),
        }
    }
}
