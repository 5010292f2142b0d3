//! The `HolidayCalendar` capability trait and [`SupportedRange`].
//!
//! Schedule generation, date adjustment, and fixing code depend only on this
//! trait.  Every method is a pure function of the calendar and its
//! arguments; a query for a date the calendar holds no data for is an
//! error, never a guess.

use crate::business_day_convention::BusinessDayConvention;
use crate::date::Date;
use bc_core::errors::Result;
use bc_core::ensure;

/// The closed-open interval of dates over which a calendar can answer
/// queries.
///
/// Bounded ranges always cover whole years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SupportedRange {
    /// Every representable date is supported.
    Unbounded,
    /// `[start-01-01, end_exclusive-01-01)`.
    Years {
        /// First supported year.
        start: u16,
        /// First year after the range.
        end_exclusive: u16,
    },
}

impl SupportedRange {
    /// Return `true` for [`SupportedRange::Unbounded`].
    pub fn is_unbounded(&self) -> bool {
        matches!(self, SupportedRange::Unbounded)
    }

    /// Return `true` if `date` lies in the range.
    pub fn contains(&self, date: Date) -> bool {
        match *self {
            SupportedRange::Unbounded => true,
            SupportedRange::Years { start, end_exclusive } => {
                (start..end_exclusive).contains(&date.year())
            }
        }
    }

    /// First supported date, or `None` when unbounded.
    pub fn first_date(&self) -> Option<Date> {
        match *self {
            SupportedRange::Unbounded => None,
            SupportedRange::Years { start, .. } => Date::from_ymd(start, 1, 1).ok(),
        }
    }

    /// Last supported date (inclusive), or `None` when unbounded.
    pub fn last_date(&self) -> Option<Date> {
        match *self {
            SupportedRange::Unbounded => None,
            SupportedRange::Years { end_exclusive, .. } => {
                Date::from_ymd(end_exclusive - 1, 12, 31).ok()
            }
        }
    }

    /// The overlap of two ranges, or `None` if they share no year.
    pub fn intersection(self, other: SupportedRange) -> Option<SupportedRange> {
        match (self, other) {
            (SupportedRange::Unbounded, r) | (r, SupportedRange::Unbounded) => Some(r),
            (
                SupportedRange::Years { start: s1, end_exclusive: e1 },
                SupportedRange::Years { start: s2, end_exclusive: e2 },
            ) => {
                let start = s1.max(s2);
                let end_exclusive = e1.min(e2);
                (start < end_exclusive).then_some(SupportedRange::Years { start, end_exclusive })
            }
        }
    }
}

impl std::fmt::Display for SupportedRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SupportedRange::Unbounded => write!(f, "(unbounded)"),
            SupportedRange::Years { start, end_exclusive } => {
                write!(f, "[{start:04}-01-01, {end_exclusive:04}-01-01)")
            }
        }
    }
}

/// A holiday calendar.
///
/// Implementors must make every method total over
/// [`supported_range`](HolidayCalendar::supported_range) and fail outside
/// it.
pub trait HolidayCalendar: std::fmt::Debug + Send + Sync {
    /// Identifying name (e.g. `"GBLO"` or `"GBLO+USNY"`).
    fn name(&self) -> &str;

    /// Return `true` if `date` is not a business day.
    fn is_holiday(&self, date: Date) -> Result<bool>;

    /// Return `true` if `date` is a business day.
    fn is_business_day(&self, date: Date) -> Result<bool> {
        Ok(!self.is_holiday(date)?)
    }

    /// Move `date` by `amount` business days; zero returns `date` unchanged.
    fn shift(&self, date: Date, amount: i32) -> Result<Date>;

    /// The first business day strictly after `date`.
    fn next(&self, date: Date) -> Result<Date> {
        self.shift(date, 1)
    }

    /// The last business day strictly before `date`.
    fn previous(&self, date: Date) -> Result<Date> {
        self.shift(date, -1)
    }

    /// `date` if it is a business day, otherwise [`next`](HolidayCalendar::next).
    fn next_or_same(&self, date: Date) -> Result<Date> {
        if self.is_business_day(date)? {
            Ok(date)
        } else {
            self.next(date)
        }
    }

    /// `date` if it is a business day, otherwise
    /// [`previous`](HolidayCalendar::previous).
    fn previous_or_same(&self, date: Date) -> Result<Date> {
        if self.is_business_day(date)? {
            Ok(date)
        } else {
            self.previous(date)
        }
    }

    /// `date` if it is a business day, else the next business day in the
    /// same month, else the last business day of the month.  Never returns
    /// a date in another month.
    fn next_same_or_last_in_month(&self, date: Date) -> Result<Date>;

    /// Return `true` if `date` is the last business day of its month.
    fn is_last_business_day_of_month(&self, date: Date) -> Result<bool> {
        Ok(self.is_business_day(date)? && self.last_business_day_of_month(date)? == date)
    }

    /// The last business day of the month containing `date`.
    fn last_business_day_of_month(&self, date: Date) -> Result<Date>;

    /// Number of business days in `[start, end)`.
    fn days_between(&self, start: Date, end: Date) -> Result<i32> {
        ensure!(start <= end, "days_between: end {end} is before start {start}");
        let mut count = 0;
        let mut d = start;
        while d < end {
            if self.is_business_day(d)? {
                count += 1;
            }
            d = d.add_days(1)?;
        }
        Ok(count)
    }

    /// Adjust `date` according to `convention`.
    fn adjust(&self, date: Date, convention: BusinessDayConvention) -> Result<Date> {
        match convention {
            BusinessDayConvention::Unadjusted => Ok(date),
            BusinessDayConvention::Following => self.next_or_same(date),
            BusinessDayConvention::ModifiedFollowing => self.next_same_or_last_in_month(date),
            BusinessDayConvention::Preceding => self.previous_or_same(date),
            BusinessDayConvention::ModifiedPreceding => {
                if self.is_business_day(date)? {
                    return Ok(date);
                }
                // Only step back when a business day precedes `date` in its
                // own month; the backward walk may otherwise leave the range.
                let first = date.first_of_month();
                if date != first && self.days_between(first, date)? > 0 {
                    self.previous(date)
                } else {
                    self.next(date)
                }
            }
            BusinessDayConvention::Nearest => {
                if self.is_business_day(date)? {
                    return Ok(date);
                }
                let fwd = self.next(date)?;
                let bwd = self.previous(date)?;
                if fwd - date <= date - bwd {
                    Ok(fwd)
                } else {
                    Ok(bwd)
                }
            }
            BusinessDayConvention::EndOfMonth => self.last_business_day_of_month(date),
        }
    }

    /// The range over which this calendar answers queries.
    fn supported_range(&self) -> SupportedRange;

    /// A calendar whose holidays and weekend days are the union of both
    /// calendars', valid over the overlap of their supported ranges.
    fn combine_with(&self, other: &Self) -> Result<Self>
    where
        Self: Sized;
}
