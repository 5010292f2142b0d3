//! The immutable, bit-packed holiday calendar.
//!
//! An [`ImmutableHolidayCalendar`] is built once from a set of holiday
//! dates and a set of weekend days.  At construction it derives a
//! lookup table holding one 32-bit business-day mask per month of its
//! supported range; every query afterwards is a table lookup followed by a
//! few word-level bit operations (shift, population count, trailing or
//! leading zero count).  Nothing is allocated after construction unless an
//! error is returned.

use super::lookup_table::{derived_month_mask, low_bits, LookupTable};
use crate::calendar::{HolidayCalendar, SupportedRange};
use crate::date::{days_in_month, Date, MAX_YEAR, MIN_YEAR};
use crate::weekday::{Weekday, WeekdaySet};
use bc_core::ensure;
use bc_core::errors::{Error, Result};

/// A holiday calendar backed by per-month bitmasks.
///
/// Two calendars are equal when their names are equal; use
/// [`structurally_eq`](ImmutableHolidayCalendar::structurally_eq) to compare
/// holidays and weekend days as well.
#[derive(Debug, Clone)]
pub struct ImmutableHolidayCalendar {
    name: String,
    holidays: Box<[Date]>,
    weekend_days: WeekdaySet,
    table: LookupTable,
}

impl ImmutableHolidayCalendar {
    /// Create a calendar with a two-day weekend.
    ///
    /// The two weekend days may be the same, giving a one-day weekend.
    pub fn of(
        name: impl Into<String>,
        holidays: impl IntoIterator<Item = Date>,
        first_weekend_day: Weekday,
        second_weekend_day: Weekday,
    ) -> Result<Self> {
        Self::of_weekend_days(name, holidays, [first_weekend_day, second_weekend_day])
    }

    /// Create a calendar from any set of weekend days.
    ///
    /// `weekend_days` may be empty, in which case weekend dates must be
    /// listed in `holidays` to be non-business days.  Holidays may be given
    /// in any order and may repeat.
    ///
    /// With no holidays the supported range is unbounded; otherwise it spans
    /// the whole years from the earliest to the latest holiday.
    pub fn of_weekend_days(
        name: impl Into<String>,
        holidays: impl IntoIterator<Item = Date>,
        weekend_days: impl IntoIterator<Item = Weekday>,
    ) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(Error::InvalidArgument(
                "calendar name must not be empty".into(),
            ));
        }
        let mut holidays: Vec<Date> = holidays.into_iter().collect();
        holidays.sort_unstable();
        holidays.dedup();
        let range = match (holidays.first(), holidays.last()) {
            (Some(first), Some(last)) => SupportedRange::Years {
                start: first.year(),
                end_exclusive: last.year() + 1,
            },
            _ => SupportedRange::Unbounded,
        };
        let weekend_days = weekend_days.into_iter().collect();
        Ok(Self::build(name, holidays, weekend_days, range))
    }

    /// A calendar with no holidays and only the given weekend days.
    pub(crate) fn weekends_only(name: &str, weekend_days: WeekdaySet) -> Self {
        Self::build(name.to_owned(), Vec::new(), weekend_days, SupportedRange::Unbounded)
    }

    fn build(
        name: String,
        holidays: Vec<Date>,
        weekend_days: WeekdaySet,
        range: SupportedRange,
    ) -> Self {
        let table = match range {
            SupportedRange::Unbounded => LookupTable::unbounded(),
            SupportedRange::Years { start, end_exclusive } => {
                LookupTable::build(&holidays, weekend_days, start, end_exclusive)
            }
        };
        log::debug!(
            "built holiday calendar '{}' over {} ({} months, {} holidays, weekend {:?})",
            name,
            range,
            table.len(),
            holidays.len(),
            weekend_days
        );
        Self {
            name,
            holidays: holidays.into_boxed_slice(),
            weekend_days,
            table,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// The holiday dates, sorted and without duplicates.
    pub fn holidays(&self) -> &[Date] {
        &self.holidays
    }

    /// The weekend days.
    pub fn weekend_days(&self) -> WeekdaySet {
        self.weekend_days
    }

    /// Compare name, holidays, and weekend days.
    pub fn structurally_eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.holidays == other.holidays
            && self.weekend_days == other.weekend_days
            && self.table == other.table
    }

    /// Return `true` if combining with this calendar changes nothing.
    fn is_neutral(&self) -> bool {
        self.holidays.is_empty() && self.weekend_days.is_empty() && self.table.is_unbounded()
    }

    // ── Table access ──────────────────────────────────────────────────────────

    /// The business-day mask for `year`/`month`.
    ///
    /// `None` means the month is outside the table; for the unbounded
    /// sentinel that only happens outside the representable years.
    #[inline]
    fn mask(&self, year: u16, month: u8) -> Option<u32> {
        self.table.get(year, month).or_else(|| {
            (self.table.is_unbounded() && (MIN_YEAR..=MAX_YEAR).contains(&year))
                .then(|| derived_month_mask(year, month, self.weekend_days))
        })
    }

    /// The mask for `year`/`month`, or an error naming `year-month-day`.
    ///
    /// Walks pass the first date they reach in the month, which need not be
    /// a representable [`Date`] (e.g. 2200-01-01).
    #[inline]
    fn mask_at(&self, year: u16, month: u8, day: u8) -> Result<u32> {
        self.mask(year, month).ok_or_else(|| self.out_of_range(year, month, day))
    }

    #[cold]
    fn out_of_range(&self, year: u16, month: u8, day: u8) -> Error {
        let date = format!("{year:04}-{month:02}-{day:02}");
        if self.table.is_unbounded() {
            Error::Date(format!(
                "date {date} is outside the representable range [{}, {}]",
                Date::MIN,
                Date::MAX
            ))
        } else {
            Error::OutOfRange {
                calendar: self.name.clone(),
                date,
                range: self.table.range().to_string(),
            }
        }
    }

    #[cold]
    fn no_business_day(&self, year: u16, month: u8) -> Error {
        Error::NoBusinessDay {
            calendar: self.name.clone(),
            year,
            month,
        }
    }

    // ── Shifting ──────────────────────────────────────────────────────────────

    fn shift_forward(&self, origin: Date, mut remaining: u32) -> Result<Date> {
        let (mut year, mut month, mut day) = origin.ymd();
        // Low bits of the current month already walked past.
        let mut passed = u32::from(day);
        loop {
            let mut ahead = self.mask_at(year, month, day)? >> passed;
            let available = ahead.count_ones();
            if available >= remaining {
                for _ in 1..remaining {
                    ahead &= ahead - 1;
                }
                let day0 = passed + ahead.trailing_zeros();
                return Ok(Date::from_ymd_unchecked(year, month, day0 as u8 + 1));
            }
            remaining -= available;
            (year, month) = next_month(year, month);
            (day, passed) = (1, 0);
        }
    }

    fn shift_backward(&self, origin: Date, mut remaining: u32) -> Result<Date> {
        let (mut year, mut month, mut day) = origin.ymd();
        // Low bits of the current month still to be walked.
        let mut before = u32::from(day) - 1;
        loop {
            let mut behind = self.mask_at(year, month, day)? & low_bits(before);
            let available = behind.count_ones();
            if available >= remaining {
                for _ in 1..remaining {
                    behind &= !(1u32 << highest_bit(behind));
                }
                let day0 = highest_bit(behind);
                return Ok(Date::from_ymd_unchecked(year, month, day0 as u8 + 1));
            }
            remaining -= available;
            (year, month) = previous_month(year, month);
            (day, before) = (days_in_month(year, month), 32);
        }
    }
}

/// Index of the highest set bit; `mask` must be non-zero.
#[inline]
fn highest_bit(mask: u32) -> u32 {
    debug_assert_ne!(mask, 0);
    31 - mask.leading_zeros()
}

#[inline]
fn next_month(year: u16, month: u8) -> (u16, u8) {
    if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

#[inline]
fn previous_month(year: u16, month: u8) -> (u16, u8) {
    if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

impl HolidayCalendar for ImmutableHolidayCalendar {
    fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    fn is_holiday(&self, date: Date) -> Result<bool> {
        let (y, m, d) = date.ymd();
        let mask = self.mask_at(y, m, d)?;
        Ok(mask >> (d - 1) & 1 == 0)
    }

    fn shift(&self, date: Date, amount: i32) -> Result<Date> {
        match amount.cmp(&0) {
            std::cmp::Ordering::Equal => Ok(date),
            std::cmp::Ordering::Greater => self.shift_forward(date, amount.unsigned_abs()),
            std::cmp::Ordering::Less => self.shift_backward(date, amount.unsigned_abs()),
        }
    }

    fn next(&self, date: Date) -> Result<Date> {
        self.shift_forward(date, 1)
    }

    fn previous(&self, date: Date) -> Result<Date> {
        self.shift_backward(date, 1)
    }

    fn next_same_or_last_in_month(&self, date: Date) -> Result<Date> {
        let (y, m, d) = date.ymd();
        let mask = self.mask_at(y, m, d)?;
        if mask >> (d - 1) & 1 == 1 {
            return Ok(date);
        }
        let ahead = mask >> d;
        let day0 = if ahead != 0 {
            u32::from(d) + ahead.trailing_zeros()
        } else if mask != 0 {
            highest_bit(mask)
        } else {
            return Err(self.no_business_day(y, m));
        };
        Ok(Date::from_ymd_unchecked(y, m, day0 as u8 + 1))
    }

    fn is_last_business_day_of_month(&self, date: Date) -> Result<bool> {
        let (y, m, d) = date.ymd();
        let mask = self.mask_at(y, m, d)?;
        Ok(mask >> (d - 1) == 1)
    }

    fn last_business_day_of_month(&self, date: Date) -> Result<Date> {
        let (y, m, d) = date.ymd();
        let mask = self.mask_at(y, m, d)?;
        if mask == 0 {
            return Err(self.no_business_day(y, m));
        }
        Ok(Date::from_ymd_unchecked(y, m, (32 - mask.leading_zeros()) as u8))
    }

    fn days_between(&self, start: Date, end: Date) -> Result<i32> {
        ensure!(start <= end, "days_between: end {end} is before start {start}");
        if start == end {
            return Ok(0);
        }
        let (mut year, mut month, start_day) = start.ymd();
        let (end_year, end_month, end_day) = end.ymd();
        let mut skip = u32::from(start_day) - 1;
        let mut count = 0u32;
        loop {
            let last = (year, month) == (end_year, end_month);
            if last && end_day == 1 {
                break;
            }
            let mut window = self.mask_at(year, month, skip as u8 + 1)? >> skip << skip;
            if last {
                window &= low_bits(u32::from(end_day) - 1);
            }
            count += window.count_ones();
            if last {
                break;
            }
            (year, month) = next_month(year, month);
            skip = 0;
        }
        Ok(count as i32)
    }

    fn supported_range(&self) -> SupportedRange {
        self.table.range()
    }

    /// Union of holidays and weekend days over the overlap of both ranges.
    ///
    /// Holidays of either calendar outside the overlap are dropped, so the
    /// result only answers queries where both inputs hold data.  Combining
    /// with an identical calendar, or with one that has neither holidays nor
    /// weekend days, returns `self` unchanged.
    fn combine_with(&self, other: &Self) -> Result<Self> {
        if self.structurally_eq(other) || other.is_neutral() {
            return Ok(self.clone());
        }
        let range = self
            .supported_range()
            .intersection(other.supported_range())
            .ok_or_else(|| Error::IncompatibleRange {
                first: self.supported_range().to_string(),
                second: other.supported_range().to_string(),
            })?;
        log::debug!(
            "combining holiday calendars '{}' and '{}' over {}",
            self.name,
            other.name,
            range
        );
        let mut holidays: Vec<Date> = self
            .holidays
            .iter()
            .chain(other.holidays.iter())
            .copied()
            .filter(|d| range.contains(*d))
            .collect();
        holidays.sort_unstable();
        holidays.dedup();
        let weekend_days = self.weekend_days.union(other.weekend_days);
        let name = format!("{}+{}", self.name, other.name);
        Ok(Self::build(name, holidays, weekend_days, range))
    }
}

impl PartialEq for ImmutableHolidayCalendar {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for ImmutableHolidayCalendar {}

impl std::hash::Hash for ImmutableHolidayCalendar {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl std::fmt::Display for ImmutableHolidayCalendar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
