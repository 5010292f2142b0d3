//! Concrete holiday calendars.

/// The immutable bit-packed calendar.
pub mod immutable;

/// Per-month business-day bitmasks.
pub(crate) mod lookup_table;

/// Weekend-only calendars.
pub mod standard;

pub use immutable::ImmutableHolidayCalendar;
