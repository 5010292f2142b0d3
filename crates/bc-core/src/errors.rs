//! Error types for bizcal.
//!
//! Every fallible operation in the workspace returns the single
//! `thiserror`-derived [`Error`] enum defined here.  The `ensure!` macro
//! gives a terse way to return precondition failures from functions
//! returning [`Result`].

use thiserror::Error;

/// The top-level error type used throughout bizcal.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Precondition violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Invalid construction argument (empty name, unusable holiday date, …).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Date construction or date arithmetic left the representable range.
    #[error("date error: {0}")]
    Date(String),

    /// A calendar query was made for a date the calendar holds no data for.
    #[error("date {date} is outside the supported range {range} of calendar '{calendar}'")]
    OutOfRange {
        /// Name of the calendar that was queried.
        calendar: String,
        /// The offending date.
        date: String,
        /// The calendar's supported range.
        range: String,
    },

    /// Two calendars with disjoint supported ranges cannot be combined.
    #[error("cannot combine calendars with non-overlapping ranges {first} and {second}")]
    IncompatibleRange {
        /// Supported range of the receiving calendar.
        first: String,
        /// Supported range of the calendar being combined in.
        second: String,
    },

    /// A month contains no business day, so no business day can be chosen.
    #[error("no business day in {year}-{month:02} of calendar '{calendar}'")]
    NoBusinessDay {
        /// Name of the calendar that was queried.
        calendar: String,
        /// Year of the month.
        year: u16,
        /// Month number (1–12).
        month: u8,
    },
}

/// Shorthand `Result` type used throughout bizcal.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use bc_core::{ensure, errors::Error};
/// fn positive(x: i32) -> bc_core::errors::Result<i32> {
///     ensure!(x > 0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1).is_ok());
/// assert!(matches!(positive(-1), Err(Error::Precondition(_))));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}
