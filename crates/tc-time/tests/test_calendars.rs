//! Holiday-table checks for the built-in Chilean and NYSE calendars.

use std::collections::HashSet;

use tc_time::{
    default_source, BespokeHolidays, Calendar, CalendarConfig, CalendarId, Calendars, Date,
    HolidaySource, RuleBasedHolidays,
};

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

fn config(first: u16, last: u16) -> CalendarConfig {
    CalendarConfig::default()
        .with_years(first, last)
        .with_reference_date(date(2024, 1, 1))
}

fn build(id: CalendarId, first: u16, last: u16) -> Calendar {
    Calendar::from_config(id, &config(first, last), &default_source()).unwrap()
}

/// Assert that every date in `expected` is a weekday holiday, and every
/// weekday holiday in `[from, to]` is in `expected`.
fn check_holidays(cal: &Calendar, from: Date, to: Date, expected: &[Date]) {
    let calculated = cal.holidays_between(from, to, false).unwrap();
    let calc_set: HashSet<_> = calculated.iter().copied().collect();
    let exp_set: HashSet<_> = expected.iter().copied().collect();

    for &d in &calculated {
        assert!(
            exp_set.contains(&d),
            "{}: {} calculated as holiday but not expected ({})",
            cal.name(),
            d,
            d.weekday()
        );
    }
    for &d in expected {
        assert!(
            calc_set.contains(&d),
            "{}: {} expected as holiday but not found ({})",
            cal.name(),
            d,
            d.weekday()
        );
    }
}

// ─── Chile ────────────────────────────────────────────────────────────────────

#[test]
fn test_chile_2023_holidays() {
    let expected = vec![
        date(2023, 1, 2),
        date(2023, 4, 7),
        date(2023, 5, 1),
        date(2023, 6, 21),
        date(2023, 6, 26),
        date(2023, 8, 15),
        date(2023, 9, 18),
        date(2023, 9, 19),
        date(2023, 10, 9),
        date(2023, 10, 27),
        date(2023, 11, 1),
        date(2023, 12, 8),
        date(2023, 12, 25),
    ];
    let cal = build(CalendarId::Chile, 2023, 2023);
    check_holidays(&cal, date(2023, 1, 1), date(2023, 12, 31), &expected);
}

#[test]
fn test_chile_financial_2024_holidays() {
    let expected = vec![
        date(2024, 1, 1),
        date(2024, 3, 29),
        date(2024, 5, 1),
        date(2024, 5, 21),
        date(2024, 6, 20),
        date(2024, 7, 16),
        date(2024, 8, 15),
        date(2024, 9, 18),
        date(2024, 9, 19),
        date(2024, 9, 20),
        date(2024, 10, 31),
        date(2024, 11, 1),
        date(2024, 12, 25),
        date(2024, 12, 31),
    ];
    let cal = build(CalendarId::ChileFinancial, 2024, 2024);
    check_holidays(&cal, date(2024, 1, 1), date(2024, 12, 31), &expected);
}

#[test]
fn test_chile_financial_has_every_new_years_eve() {
    let cal = build(CalendarId::ChileFinancial, 1990, 2050);
    for year in 1990..=2050 {
        assert!(cal.is_holiday(date(year, 12, 31)), "Dec 31 {year} missing");
    }
    let plain = build(CalendarId::Chile, 1990, 2050);
    assert!(!plain.is_holiday(date(2024, 12, 31)));
}

// ─── NYSE ─────────────────────────────────────────────────────────────────────

#[test]
fn test_nyse_2024_holidays() {
    let expected = vec![
        date(2024, 1, 1),
        date(2024, 1, 15),
        date(2024, 2, 19),
        date(2024, 3, 29),
        date(2024, 5, 27),
        date(2024, 6, 19),
        date(2024, 7, 4),
        date(2024, 9, 2),
        date(2024, 11, 28),
        date(2024, 12, 25),
    ];
    let cal = build(CalendarId::Nyse, 2024, 2024);
    check_holidays(&cal, date(2024, 1, 1), date(2024, 12, 31), &expected);
}

#[test]
fn test_nyse_observed_holidays() {
    let cal = build(CalendarId::Nyse, 2020, 2030);
    // 2021-12-25 was a Saturday → observed Friday 2021-12-24
    assert!(cal.is_holiday(date(2021, 12, 24)));
    // 2022-06-19 was a Sunday → observed Monday 2022-06-20
    assert!(cal.is_holiday(date(2022, 6, 20)));
    // 2020-07-04 was a Saturday → observed Friday 2020-07-03
    assert!(cal.is_holiday(date(2020, 7, 3)));
}

// ─── Construction ─────────────────────────────────────────────────────────────

#[test]
fn test_build_is_deterministic() {
    let a = build(CalendarId::ChileFinancial, 2000, 2010);
    let b = build(CalendarId::ChileFinancial, 2000, 2010);
    assert_eq!(a.holidays(), b.holidays());
    assert!(a.holiday_count() > 0);
}

#[test]
fn test_holidays_within_span() {
    let cal = build(CalendarId::Nyse, 2001, 2003);
    let holidays = cal.holidays();
    assert!(holidays.windows(2).all(|w| w[0] < w[1]));
    assert!(holidays
        .iter()
        .all(|d| (2001..=2003).contains(&d.year())));
}

#[test]
fn test_bespoke_source_builds_calendar() {
    let mut source = BespokeHolidays::new();
    source.add_holiday(date(2024, 3, 15));
    let cal = Calendar::build(CalendarId::WeekendsOnly, 2024, 2024, &source).unwrap();
    assert!(cal.is_holiday(date(2024, 3, 15)));
    assert_eq!(cal.holiday_count(), 1);
}

#[test]
fn test_rule_source_is_reusable_through_references() {
    let source: Box<dyn HolidaySource> = Box::new(default_source());
    let listed = source
        .list_holidays(CalendarId::ChileFinancial, 2024, 2024)
        .unwrap();
    assert!(listed.contains(&date(2024, 12, 31)));
    let rules = RuleBasedHolidays;
    let by_ref: &dyn HolidaySource = &rules;
    assert!(by_ref
        .list_holidays(CalendarId::Nyse, 2024, 2024)
        .unwrap()
        .contains(&date(2024, 7, 4)));
}

#[test]
fn test_standard_calendars_default_span() {
    let cals = Calendars::standard(&CalendarConfig::default()).unwrap();
    for cal in [cals.chile_financial(), cals.nyse()] {
        assert_eq!(cal.first_year(), 1990);
        assert_eq!(cal.last_year(), 2050);
        assert!(cal.covers(date(1990, 1, 1)));
        assert!(cal.covers(date(2050, 12, 31)));
        assert!(!cal.covers(date(2051, 1, 1)));
    }
}
