//! Weekend-only calendars.
//!
//! None of these has holidays, so each has an unbounded supported range.
//! Build them once at start-up and pass them by reference.

use super::immutable::ImmutableHolidayCalendar;
use crate::weekday::{Weekday, WeekdaySet};

/// Name of the neutral calendar returned by [`no_holidays`].
pub const NO_HOLIDAYS: &str = "NoHolidays";

/// Every day is a business day.  Combining any calendar with this one
/// returns that calendar unchanged.
pub fn no_holidays() -> ImmutableHolidayCalendar {
    ImmutableHolidayCalendar::weekends_only(NO_HOLIDAYS, WeekdaySet::EMPTY)
}

/// Saturday and Sunday are the only non-business days.
pub fn sat_sun() -> ImmutableHolidayCalendar {
    weekend("Sat/Sun", Weekday::Saturday, Weekday::Sunday)
}

/// Friday and Saturday are the only non-business days.
pub fn fri_sat() -> ImmutableHolidayCalendar {
    weekend("Fri/Sat", Weekday::Friday, Weekday::Saturday)
}

/// Thursday and Friday are the only non-business days.
pub fn thu_fri() -> ImmutableHolidayCalendar {
    weekend("Thu/Fri", Weekday::Thursday, Weekday::Friday)
}

fn weekend(name: &str, first: Weekday, second: Weekday) -> ImmutableHolidayCalendar {
    ImmutableHolidayCalendar::weekends_only(name, WeekdaySet::from_days(&[first, second]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{HolidayCalendar, SupportedRange};
    use crate::date::Date;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn no_holidays_every_day_is_business() {
        let cal = no_holidays();
        assert_eq!(cal.name(), NO_HOLIDAYS);
        assert_eq!(cal.supported_range(), SupportedRange::Unbounded);
        assert!(cal.is_business_day(date(2023, 12, 25)).unwrap());
        assert!(cal.is_business_day(date(1900, 1, 1)).unwrap());
        assert_eq!(cal.next(date(2024, 2, 28)).unwrap(), date(2024, 2, 29));
    }

    #[test]
    fn sat_sun_weekend() {
        let cal = sat_sun();
        // 2023-09-02 is a Saturday.
        assert!(cal.is_holiday(date(2023, 9, 2)).unwrap());
        assert!(cal.is_holiday(date(2023, 9, 3)).unwrap());
        assert_eq!(cal.next(date(2023, 9, 1)).unwrap(), date(2023, 9, 4));
        assert_eq!(cal.previous(date(2023, 9, 4)).unwrap(), date(2023, 9, 1));
    }

    #[test]
    fn middle_eastern_weekends() {
        // 2023-09-07 is a Thursday.
        assert!(fri_sat().is_business_day(date(2023, 9, 7)).unwrap());
        assert!(fri_sat().is_holiday(date(2023, 9, 8)).unwrap());
        assert!(thu_fri().is_holiday(date(2023, 9, 7)).unwrap());
        assert!(thu_fri().is_business_day(date(2023, 9, 9)).unwrap());
    }

    #[test]
    fn unbounded_stops_at_representable_range() {
        assert!(sat_sun().next(Date::MAX).is_err());
        assert!(sat_sun().previous(Date::MIN).is_err());
        assert!(sat_sun().shift(date(2199, 12, 1), 30).is_err());
    }

    #[test]
    fn weekend_calendars_combine_unbounded() {
        let c = sat_sun().combine_with(&fri_sat()).unwrap();
        assert_eq!(c.name(), "Sat/Sun+Fri/Sat");
        assert_eq!(c.supported_range(), SupportedRange::Unbounded);
        assert_eq!(c.weekend_days().len(), 3);
        // Thursday 2023-09-07 -> Monday 2023-09-11.
        assert_eq!(c.next(date(2023, 9, 7)).unwrap(), date(2023, 9, 11));
    }
}
