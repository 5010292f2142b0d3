//! `Date` type.
//!
//! Dates are stored as a serial number of days.
//!
//! # Serial number convention
//! * Serial 1 = January 1, 1900 (a Monday).
//! * The valid date range is 1900-01-01 to 2199-12-31.
//!
//! Conversion between the serial and the civil `(year, month, day)` triple
//! uses closed-form 400-year era arithmetic (Hinnant's days-from-civil), so
//! every accessor is O(1).  Calendar queries convert a date on every call.

use crate::weekday::Weekday;
use bc_core::errors::{Error, Result};

/// A calendar date represented as a serial number.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(i32);

/// First supported year.
pub const MIN_YEAR: u16 = 1900;

/// Last supported year.
pub const MAX_YEAR: u16 = 2199;

/// Serial offset between the Unix-epoch day count and our serial numbers.
const UNIX_EPOCH_SERIAL: i32 = 25_568;

impl Date {
    /// Minimum valid date: January 1, 1900.
    pub const MIN: Date = Date(1);

    /// Maximum valid date: December 31, 2199.
    pub const MAX: Date = Date(109_573);

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from a serial number.
    pub fn from_serial(serial: i32) -> Result<Self> {
        if !(Self::MIN.0..=Self::MAX.0).contains(&serial) {
            return Err(Error::Date(format!(
                "serial {serial} out of range [{}, {}]",
                Self::MIN.0,
                Self::MAX.0
            )));
        }
        Ok(Date(serial))
    }

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(Error::Date(format!(
                "year {year} out of range [{MIN_YEAR}, {MAX_YEAR}]"
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {days_in}] for {year}-{month:02}"
            )));
        }
        Ok(Date(serial_from_ymd(year, month, day)))
    }

    /// Build a date from components already known to be valid.
    pub(crate) fn from_ymd_unchecked(year: u16, month: u8, day: u8) -> Self {
        debug_assert!(
            Date::from_ymd(year, month, day).is_ok(),
            "invalid date {year}-{month:02}-{day:02}"
        );
        Date(serial_from_ymd(year, month, day))
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number.
    pub fn serial(self) -> i32 {
        self.0
    }

    /// Return `(year, month, day_of_month)` in one conversion.
    pub fn ymd(self) -> (u16, u8, u8) {
        ymd_from_serial(self.0)
    }

    /// Return the year (1900–2199).
    pub fn year(self) -> u16 {
        self.ymd().0
    }

    /// Return the month (1–12).
    pub fn month(self) -> u8 {
        self.ymd().1
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(self) -> u8 {
        self.ymd().2
    }

    /// Return the weekday.
    pub fn weekday(self) -> Weekday {
        weekday_from_serial(self.0)
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` calendar days.  Returns an error if the result is out
    /// of range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        self.0
            .checked_add(n)
            .ok_or_else(|| Error::Date(format!("date arithmetic overflow: {self} + {n}")))
            .and_then(Date::from_serial)
    }

    /// Return the number of calendar days between `self` and `other`.
    /// Positive if `other > self`.
    pub fn days_between(self, other: Date) -> i32 {
        other.0 - self.0
    }

    /// Return the first day of the month containing this date.
    pub fn first_of_month(self) -> Self {
        let (y, m, d) = self.ymd();
        Date(self.0 - (d as i32 - 1)).debug_check(y, m, 1)
    }

    /// Return the last day of the month containing this date.
    pub fn end_of_month(self) -> Self {
        let (y, m, d) = self.ymd();
        let last = days_in_month(y, m);
        Date(self.0 + (last - d) as i32).debug_check(y, m, last)
    }

    /// Return `true` if this is the last calendar day of its month.
    pub fn is_end_of_month(self) -> bool {
        self == self.end_of_month()
    }

    fn debug_check(self, year: u16, month: u8, day: u8) -> Self {
        debug_assert_eq!(self.ymd(), (year, month, day));
        self
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

// ── Display / parsing ─────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = self.ymd();
        write!(f, "{y:04}-{m:02}-{d:02}")
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({self})")
    }
}

impl std::str::FromStr for Date {
    type Err = Error;

    /// Parse an ISO `YYYY-MM-DD` date.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::Date(format!("cannot parse '{s}' as YYYY-MM-DD"));
        let mut parts = s.trim().splitn(3, '-');
        let mut field = |width: usize| {
            parts
                .next()
                .filter(|p| p.len() == width && p.bytes().all(|b| b.is_ascii_digit()))
                .and_then(|p| p.parse::<u16>().ok())
                .ok_or_else(invalid)
        };
        let year = field(4)?;
        let month = field(2)?;
        let day = field(2)?;
        Date::from_ymd(year, month as u8, day as u8)
    }
}

// ── chrono interop ────────────────────────────────────────────────────────────

#[cfg(feature = "chrono")]
impl TryFrom<chrono::NaiveDate> for Date {
    type Error = Error;

    fn try_from(value: chrono::NaiveDate) -> Result<Self> {
        use chrono::Datelike;
        let year = u16::try_from(value.year())
            .map_err(|_| Error::Date(format!("year {} out of range", value.year())))?;
        Date::from_ymd(year, value.month() as u8, value.day() as u8)
    }
}

#[cfg(feature = "chrono")]
impl From<Date> for chrono::NaiveDate {
    fn from(value: Date) -> Self {
        // `NaiveDate::default()` is the Unix epoch, 1970-01-01.
        let since_epoch = i64::from(value.serial() - UNIX_EPOCH_SERIAL);
        chrono::NaiveDate::default() + chrono::Duration::days(since_epoch)
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month));
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Weekday of a serial number; serial 1 is a Monday.
pub(crate) fn weekday_from_serial(serial: i32) -> Weekday {
    match (serial - 1).rem_euclid(7) {
        0 => Weekday::Monday,
        1 => Weekday::Tuesday,
        2 => Weekday::Wednesday,
        3 => Weekday::Thursday,
        4 => Weekday::Friday,
        5 => Weekday::Saturday,
        _ => Weekday::Sunday,
    }
}

/// Serial number of a valid civil date.
///
/// Counts March-based years so that the leap day is the last day of the
/// computational year.
pub(crate) fn serial_from_ymd(year: u16, month: u8, day: u8) -> i32 {
    let (m, d) = (month as i32, day as i32);
    let y = year as i32 - i32::from(m <= 2);
    let era = y.div_euclid(400);
    let yoe = y - era * 400;
    let mp = (m + 9) % 12;
    let doy = (153 * mp + 2) / 5 + d - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468 + UNIX_EPOCH_SERIAL
}

/// Decompose a serial number into (year, month, day).
fn ymd_from_serial(serial: i32) -> (u16, u8, u8) {
    let z = serial - UNIX_EPOCH_SERIAL + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = doy - (153 * mp + 2) / 5 + 1;
    let m = if mp < 10 { mp + 3 } else { mp - 9 };
    let y = yoe + era * 400 + i32::from(m <= 2);
    (y as u16, m as u8, d as u8)
}
