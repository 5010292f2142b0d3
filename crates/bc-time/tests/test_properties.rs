//! Property tests for the bit-packed calendar against a day-by-day model.
//!
//! Calendars are generated with holidays spread over 2015–2025 and both
//! end years pinned, so every query date in 2016–2024 has at least a year of
//! supported range on either side.

use std::collections::BTreeSet;

use bc_core::Error;
use bc_time::{
    BusinessDayConvention, Date, HolidayCalendar, ImmutableHolidayCalendar, Weekday, WeekdaySet,
};
use proptest::prelude::*;

#[derive(Debug)]
struct Fixture {
    cal: ImmutableHolidayCalendar,
    holidays: BTreeSet<Date>,
    weekend: WeekdaySet,
}

impl Fixture {
    fn is_holiday(&self, d: Date) -> bool {
        self.holidays.contains(&d) || self.weekend.contains(d.weekday())
    }
}

fn serial(y: u16, m: u8, d: u8) -> i32 {
    Date::from_ymd(y, m, d).unwrap().serial()
}

fn date_in(from: (u16, u8, u8), to: (u16, u8, u8)) -> impl Strategy<Value = Date> {
    (serial(from.0, from.1, from.2)..=serial(to.0, to.1, to.2))
        .prop_map(|s| Date::from_serial(s).unwrap())
}

fn query_date() -> impl Strategy<Value = Date> {
    date_in((2016, 1, 1), (2024, 12, 31))
}

fn fixture() -> impl Strategy<Value = Fixture> {
    (
        prop::collection::vec(date_in((2015, 1, 1), (2025, 12, 31)), 0..60),
        prop::sample::subsequence(Weekday::ALL.to_vec(), 0..=4),
    )
        .prop_map(|(random, weekend_days)| {
            let mut holidays: BTreeSet<Date> = random.into_iter().collect();
            holidays.insert(Date::from_ymd(2015, 1, 1).unwrap());
            holidays.insert(Date::from_ymd(2025, 12, 31).unwrap());
            let weekend: WeekdaySet = weekend_days.iter().copied().collect();
            let cal = ImmutableHolidayCalendar::of_weekend_days(
                "Prop",
                holidays.iter().copied(),
                weekend_days,
            )
            .unwrap();
            Fixture {
                cal,
                holidays,
                weekend,
            }
        })
}

fn step(d: Date, n: i32) -> Date {
    d.add_days(n).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn is_holiday_matches_model(f in fixture(), d in query_date()) {
        prop_assert_eq!(f.cal.is_holiday(d).unwrap(), f.is_holiday(d));
    }

    #[test]
    fn next_is_adjacent_business_day(f in fixture(), d in query_date()) {
        let next = f.cal.next(d).unwrap();
        prop_assert!(next > d);
        prop_assert!(!f.is_holiday(next));
        let mut between = step(d, 1);
        while between < next {
            prop_assert!(f.is_holiday(between), "{} skipped business day {}", d, between);
            between = step(between, 1);
        }
    }

    #[test]
    fn previous_is_adjacent_business_day(f in fixture(), d in query_date()) {
        let previous = f.cal.previous(d).unwrap();
        prop_assert!(previous < d);
        prop_assert!(!f.is_holiday(previous));
        let mut between = step(d, -1);
        while between > previous {
            prop_assert!(f.is_holiday(between), "{} skipped business day {}", d, between);
            between = step(between, -1);
        }
    }

    #[test]
    fn shift_is_repeated_next_or_previous(f in fixture(), d in query_date(), n in -50i32..=50) {
        let mut expected = d;
        for _ in 0..n.unsigned_abs() {
            expected = if n > 0 { f.cal.next(expected) } else { f.cal.previous(expected) }.unwrap();
        }
        prop_assert_eq!(f.cal.shift(d, n).unwrap(), expected);
    }

    #[test]
    fn next_same_or_last_stays_in_month(f in fixture(), d in query_date()) {
        match f.cal.next_same_or_last_in_month(d) {
            Ok(adjusted) => {
                prop_assert_eq!(adjusted.first_of_month(), d.first_of_month());
                prop_assert!(!f.is_holiday(adjusted));
                if !f.is_holiday(d) {
                    prop_assert_eq!(adjusted, d);
                }
                prop_assert_eq!(
                    f.cal.adjust(d, BusinessDayConvention::ModifiedFollowing).unwrap(),
                    adjusted
                );
            }
            Err(Error::NoBusinessDay { .. }) => {
                let mut day = d.first_of_month();
                while day <= d.end_of_month() {
                    prop_assert!(f.is_holiday(day));
                    day = step(day, 1);
                }
            }
            Err(other) => prop_assert!(false, "unexpected error {}", other),
        }
    }

    #[test]
    fn last_business_day_of_month_is_last(f in fixture(), d in query_date()) {
        if let Ok(last) = f.cal.last_business_day_of_month(d) {
            prop_assert_eq!(last.first_of_month(), d.first_of_month());
            prop_assert!(f.cal.is_last_business_day_of_month(last).unwrap());
            prop_assert!(!f.is_holiday(last));
            let mut after = last;
            while after < last.end_of_month() {
                after = step(after, 1);
                prop_assert!(f.is_holiday(after));
                prop_assert!(!f.cal.is_last_business_day_of_month(after).unwrap());
            }
        }
    }

    #[test]
    fn days_between_matches_model(f in fixture(), d in query_date(), len in 0i32..=365) {
        let end = step(d, len);
        let mut expected = 0;
        let mut day = d;
        while day < end {
            if !f.is_holiday(day) {
                expected += 1;
            }
            day = step(day, 1);
        }
        prop_assert_eq!(f.cal.days_between(d, end).unwrap(), expected);
    }

    #[test]
    fn combine_is_union_over_overlap(a in fixture(), b in fixture(), d in query_date()) {
        let c = a.cal.combine_with(&b.cal).unwrap();
        prop_assert_eq!(c.is_holiday(d).unwrap(), a.is_holiday(d) || b.is_holiday(d));
    }
}
