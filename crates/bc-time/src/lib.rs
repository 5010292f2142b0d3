//! # bc-time
//!
//! Dates, weekdays, business-day conventions, and the immutable bit-packed
//! holiday calendar.
//!
//! ```
//! use bc_time::{Date, HolidayCalendar, ImmutableHolidayCalendar, Weekday};
//!
//! let christmas = Date::from_ymd(2020, 12, 25)?;
//! let new_year = Date::from_ymd(2021, 1, 1)?;
//! let cal = ImmutableHolidayCalendar::of(
//!     "XX",
//!     [christmas, new_year],
//!     Weekday::Saturday,
//!     Weekday::Sunday,
//! )?;
//! assert!(cal.is_holiday(new_year)?);
//! assert_eq!(cal.next(Date::from_ymd(2020, 12, 31)?)?, Date::from_ymd(2021, 1, 4)?);
//! # Ok::<(), bc_core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Business-day adjustment conventions.
pub mod business_day_convention;

/// `HolidayCalendar` trait and `SupportedRange`.
pub mod calendar;

/// Concrete calendar implementations.
pub mod calendars;

/// `Date` type.
pub mod date;

/// `Weekday` and `WeekdaySet`.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use business_day_convention::BusinessDayConvention;
pub use calendar::{HolidayCalendar, SupportedRange};
pub use calendars::standard;
pub use calendars::ImmutableHolidayCalendar;
pub use date::Date;
pub use weekday::{Weekday, WeekdaySet};
