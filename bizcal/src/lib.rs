//! # bizcal
//!
//! Immutable, bit-packed business-day calendars for trade-date arithmetic.
//!
//! This crate is a **façade** that re-exports the workspace crates.
//! Application code should depend on this crate rather than on `bc-core` or
//! `bc-time` directly.
//!
//! ## Quick start
//!
//! ```rust
//! use bizcal::time::{Date, HolidayCalendar, ImmutableHolidayCalendar, Weekday};
//!
//! let cal = ImmutableHolidayCalendar::of(
//!     "XLON",
//!     [Date::from_ymd(2021, 12, 27)?, Date::from_ymd(2021, 12, 28)?],
//!     Weekday::Saturday,
//!     Weekday::Sunday,
//! )?;
//! let spot = cal.shift(Date::from_ymd(2021, 12, 23)?, 2)?;
//! assert_eq!(spot, Date::from_ymd(2021, 12, 29)?);
//! # Ok::<(), bizcal::core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error definitions.
pub use bc_core as core;

/// Dates, weekdays, and holiday calendars.
pub use bc_time as time;
