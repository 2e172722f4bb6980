//! # chronos-calendar
//!
//! Leap rules and date arithmetic for post-processing daily series from
//! climate models that run on a 365-day no-leap calendar.
//!
//! Two leap notions live here and must not be confused:
//!
//! - the **positional block predicate** ([`is_leap_block`]): every 4th
//!   year block of a series, counted from block 0, receives an inserted
//!   placeholder day. This is the rule the upstream classification
//!   pipeline uses; it is deliberately independent of real calendar
//!   years.
//! - the **Gregorian rule** ([`is_gregorian_leap`]): the real-world leap
//!   year rule, used when generating the date vector that extended
//!   series are pasted against.
//!
//! ## Quick start
//!
//! ```ignore
//! use chronos_calendar::{Calendar, DateStamp, date_range, is_leap_block};
//!
//! assert!(is_leap_block(0));
//! assert!(!is_leap_block(3));
//!
//! // Date vector for a Gregorian 1960-2099 span
//! let dates = date_range(Calendar::Gregorian, 1960, 2099)?;
//! assert_eq!(dates[0], DateStamp::new(Calendar::Gregorian, 1960, 1, 1)?);
//! # Ok::<(), chronos_calendar::CalendarError>(())
//! ```

mod date;
mod error;
mod leap;
mod sequence;

pub use date::Calendar;
pub use error::CalendarError;
pub use leap::{is_gregorian_leap, is_leap_block, leap_block_count};
pub use sequence::{DateStamp, date_range};
