//! Per-month business-day bitmasks.
//!
//! A [`LookupTable`] holds one `u32` per calendar month of a whole-year
//! range.  Bit `i` of a mask is set iff day `i + 1` of that month is a
//! business day.  Bits at or above the month's length are always clear, so
//! no query ever needs to know how long a month is.

use crate::calendar::SupportedRange;
use crate::date::{days_in_month, serial_from_ymd, weekday_from_serial, Date};
use crate::weekday::{Weekday, WeekdaySet};

/// Every 7th bit of a 31-day window, starting at bit 0.
///
/// Shifted left by the distance from the 1st of a month to a weekend day,
/// it marks every occurrence of that weekday in the month.
pub(crate) const EVERY_SEVENTH_DAY: u32 = every_seventh_bit();

const fn every_seventh_bit() -> u32 {
    let mut pattern = 0u32;
    let mut bit = 0;
    while bit < 31 {
        pattern |= 1 << bit;
        bit += 7;
    }
    pattern
}

/// Mask with exactly the bits for days `1..=length` set.
#[inline]
pub(crate) fn all_days(length: u8) -> u32 {
    debug_assert!(length <= 31);
    (1u32 << length) - 1
}

/// Mask with the lowest `n` bits set, for `n` in `0..=32`.
#[inline]
pub(crate) fn low_bits(n: u32) -> u32 {
    if n >= 32 {
        u32::MAX
    } else {
        (1u32 << n) - 1
    }
}

/// Business-day mask of a month that has no holidays, only weekends.
pub(crate) fn weekend_mask(length: u8, first_weekday: Weekday, weekend: WeekdaySet) -> u32 {
    weekend.iter().fold(all_days(length), |mask, day| {
        mask & !(EVERY_SEVENTH_DAY << first_weekday.days_until(day))
    })
}

/// Weekend-only mask for `year`/`month`, computed from scratch.
pub(crate) fn derived_month_mask(year: u16, month: u8, weekend: WeekdaySet) -> u32 {
    let first = weekday_from_serial(serial_from_ymd(year, month, 1));
    weekend_mask(days_in_month(year, month), first, weekend)
}

/// An immutable array of month masks covering `[start_year, start_year + len / 12)`.
///
/// The empty table is the sentinel for calendars without holidays, whose
/// supported range is unbounded.
#[derive(Clone, PartialEq, Eq, Hash)]
pub(crate) struct LookupTable {
    start_year: u16,
    masks: Box<[u32]>,
}

impl LookupTable {
    /// The zero-length sentinel table.
    pub(crate) fn unbounded() -> Self {
        Self {
            start_year: 0,
            masks: Box::new([]),
        }
    }

    /// Build the masks for `[start_year, end_year_exclusive)`.
    ///
    /// Weekend days are cleared first, then each holiday inside the range.
    pub(crate) fn build(
        holidays: &[Date],
        weekend: WeekdaySet,
        start_year: u16,
        end_year_exclusive: u16,
    ) -> Self {
        debug_assert!(start_year < end_year_exclusive);
        let months = 12 * usize::from(end_year_exclusive - start_year);
        let mut masks = Vec::with_capacity(months);
        let mut first_of_month = serial_from_ymd(start_year, 1, 1);
        for year in start_year..end_year_exclusive {
            for month in 1..=12 {
                let length = days_in_month(year, month);
                let first_weekday = weekday_from_serial(first_of_month);
                masks.push(weekend_mask(length, first_weekday, weekend));
                first_of_month += i32::from(length);
            }
        }
        let mut table = Self {
            start_year,
            masks: masks.into_boxed_slice(),
        };
        for &holiday in holidays {
            let (y, m, d) = holiday.ymd();
            if let Some(index) = table.index(y, m) {
                table.masks[index] &= !(1u32 << (d - 1));
            }
        }
        table
    }

    /// Return `true` for the zero-length sentinel.
    #[inline]
    pub(crate) fn is_unbounded(&self) -> bool {
        self.masks.is_empty()
    }

    #[inline]
    fn index(&self, year: u16, month: u8) -> Option<usize> {
        let offset = usize::from(year.checked_sub(self.start_year)?);
        let index = offset * 12 + usize::from(month) - 1;
        (index < self.masks.len()).then_some(index)
    }

    /// The mask for `year`/`month`, or `None` outside the table.
    #[inline]
    pub(crate) fn get(&self, year: u16, month: u8) -> Option<u32> {
        self.index(year, month).map(|index| self.masks[index])
    }

    /// The range of years the table covers.
    pub(crate) fn range(&self) -> SupportedRange {
        if self.is_unbounded() {
            SupportedRange::Unbounded
        } else {
            SupportedRange::Years {
                start: self.start_year,
                end_exclusive: self.start_year + (self.masks.len() / 12) as u16,
            }
        }
    }

    /// Number of months covered.
    pub(crate) fn len(&self) -> usize {
        self.masks.len()
    }
}

impl std::fmt::Debug for LookupTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LookupTable")
            .field("range", &self.range())
            .field("months", &self.masks.len())
            .finish()
    }
}
