//! Integration tests for `Date`, `Weekday`, and `WeekdaySet`.

use bc_time::date::{days_in_month, is_leap_year};
use bc_time::{Date, Weekday, WeekdaySet};

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

#[test]
fn leap_years() {
    assert!(is_leap_year(2000));
    assert!(is_leap_year(2024));
    assert!(!is_leap_year(1900));
    assert!(!is_leap_year(2100));
    assert_eq!(days_in_month(2000, 2), 29);
    assert_eq!(days_in_month(1900, 2), 28);
}

#[test]
fn consecutive_serials_advance_weekday_and_calendar() {
    let mut previous = Date::MIN;
    let mut weekday = previous.weekday();
    let mut d = previous.add_days(1).unwrap();
    while d <= date(2100, 12, 31) {
        assert_eq!(d - previous, 1);
        let (py, pm, pd) = previous.ymd();
        let (y, m, day) = d.ymd();
        if pd == days_in_month(py, pm) {
            assert_eq!(day, 1, "{d} does not start a month after {previous}");
            assert!(m == pm % 12 + 1);
            assert_eq!(y, if pm == 12 { py + 1 } else { py });
        } else {
            assert_eq!((y, m, day), (py, pm, pd + 1));
        }
        let expected = Weekday::from_ordinal(weekday.ordinal() % 7 + 1).unwrap();
        assert_eq!(d.weekday(), expected, "{d}");
        weekday = expected;
        previous = d;
        d = d.add_days(1).unwrap();
    }
}

#[test]
fn known_weekdays() {
    assert_eq!(date(2021, 1, 1).weekday(), Weekday::Friday);
    assert_eq!(date(2024, 1, 6).weekday(), Weekday::Saturday);
    assert_eq!(date(2199, 12, 31).weekday(), Weekday::Tuesday);
}

#[test]
fn parse_display_roundtrip() {
    for text in ["1900-01-01", "2000-02-29", "2021-12-31", "2199-12-31"] {
        let d: Date = text.parse().unwrap();
        assert_eq!(d.to_string(), text);
    }
}

#[test]
fn days_between_is_signed() {
    let a = date(2023, 1, 1);
    let b = date(2023, 3, 1);
    assert_eq!(a.days_between(b), 59);
    assert_eq!(b.days_between(a), -59);
}

#[test]
fn weekday_set_from_iterator() {
    let set: WeekdaySet = [Weekday::Sunday, Weekday::Saturday].into_iter().collect();
    assert_eq!(set, WeekdaySet::from_days(&[Weekday::Saturday, Weekday::Sunday]));
    assert_eq!(format!("{set:?}"), "{Saturday, Sunday}");
}

#[cfg(feature = "chrono")]
#[test]
fn chrono_conversions() {
    let naive = chrono::NaiveDate::from_ymd_opt(2021, 1, 4).unwrap();
    let d = Date::try_from(naive).unwrap();
    assert_eq!(d, date(2021, 1, 4));
    assert_eq!(chrono::NaiveDate::from(d), naive);
    let too_late = chrono::NaiveDate::from_ymd_opt(2300, 1, 1).unwrap();
    assert!(Date::try_from(too_late).is_err());
}

#[cfg(feature = "chrono")]
#[test]
fn chrono_conversion_agrees_at_every_month_start() {
    use chrono::Datelike;
    assert_eq!(
        chrono::NaiveDate::from(Date::MIN),
        chrono::NaiveDate::from_ymd_opt(1900, 1, 1).unwrap()
    );
    assert_eq!(
        chrono::NaiveDate::from(Date::MAX),
        chrono::NaiveDate::from_ymd_opt(2199, 12, 31).unwrap()
    );
    for year in 1900..=2199u16 {
        for month in 1..=12u8 {
            let d = date(year, month, 1);
            let naive = chrono::NaiveDate::from(d);
            assert_eq!(
                (naive.year(), naive.month(), naive.day()),
                (i32::from(year), u32::from(month), 1)
            );
            assert_eq!(Date::try_from(naive).unwrap(), d);
        }
    }
}
