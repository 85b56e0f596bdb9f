//! Chile holiday rules.

use super::easter::{easter_monday, june_solstice_utc_minus_4};
use crate::date::Date;
use crate::weekday::Weekday;

/// Return `true` if `date` is a Chilean public holiday.
///
/// Holidays falling on a weekend are reported too; the weekend rule is
/// applied separately by the calendar.
///
/// Observed holidays:
/// * New Year's Day (Jan 1), plus Jan 2 when it is a Monday (from 2017)
/// * Good Friday (em-3) and Holy Saturday (em-2)
/// * Corpus Christi (until 2006; moved to Monday from 2000)
/// * Labour Day (May 1)
/// * Navy Day (May 21)
/// * Indigenous Peoples' Day (June solstice, from 2021)
/// * San Pedro y San Pablo (Jun 29; moved to Monday from 2000)
/// * Virgen del Carmen (Jul 16, from 2007)
/// * Assumption of Mary (Aug 15)
/// * Sep 17 when it is a Monday (from 2007)
/// * Independence Day (Sep 18) and Army Day (Sep 19)
/// * Sep 20 when it is a Friday (from 2013)
/// * Meeting of Two Worlds (Oct 12; moved to Monday from 2000)
/// * Reformation Day (Oct 31, from 2008; Tuesday → previous Friday,
///   Wednesday → next Friday)
/// * All Saints' Day (Nov 1)
/// * Immaculate Conception (Dec 8)
/// * Christmas Day (Dec 25)
///
/// Election days are decreed one by one and are not modelled.
pub fn is_holiday(date: Date) -> bool {
    let w = date.weekday();
    let y = date.year();
    let m = date.month();
    let d = date.day_of_month();
    let dd = date.day_of_year();
    let em = easter_monday(y);

    // New Year's Day
    (d == 1 && m == 1)
        || (d == 2 && m == 1 && w == Weekday::Monday && y >= 2017)
        // Good Friday
        || dd == em - 3
        // Holy Saturday
        || dd == em - 2
        // Corpus Christi
        || (y < 2000 && dd == em + 59)
        || ((2000..=2006).contains(&y) && dd == em + 56)
        // Labour Day
        || (d == 1 && m == 5)
        // Navy Day
        || (d == 21 && m == 5)
        // Indigenous Peoples' Day
        || (y >= 2021 && Some(date) == indigenous_peoples_day(y))
        // San Pedro y San Pablo
        || observed(date, y, 6, 29, y >= 2000)
        // Virgen del Carmen
        || (d == 16 && m == 7 && y >= 2007)
        // Assumption of Mary
        || (d == 15 && m == 8)
        // Independence Day bridges and holidays
        || (d == 17 && m == 9 && w == Weekday::Monday && y >= 2007)
        || (d == 18 && m == 9)
        || (d == 19 && m == 9)
        || (d == 20 && m == 9 && w == Weekday::Friday && y >= 2013)
        // Meeting of Two Worlds
        || observed(date, y, 10, 12, y >= 2000)
        // Reformation Day
        || (y >= 2008 && Some(date) == reformation_day(y))
        // All Saints' Day
        || (d == 1 && m == 11)
        // Immaculate Conception
        || (d == 8 && m == 12)
        // Christmas Day
        || (d == 25 && m == 12)
}

/// `true` if `date` is the observed day of the fixed holiday `month/day`,
/// moved to a Monday when `movable` holds.
fn observed(date: Date, year: u16, month: u8, day: u8, movable: bool) -> bool {
    match Date::from_ymd(year, month, day) {
        Ok(nominal) if movable => date == moved_to_monday(nominal),
        Ok(nominal) => date == nominal,
        Err(_) => false,
    }
}

/// Tuesday to Thursday move back to Monday, Friday moves forward to Monday.
fn moved_to_monday(nominal: Date) -> Date {
    match nominal.weekday() {
        w @ (Weekday::Tuesday | Weekday::Wednesday | Weekday::Thursday) => {
            nominal - (w.ordinal() as i32 - 1)
        }
        Weekday::Friday => nominal + 3,
        _ => nominal,
    }
}

fn indigenous_peoples_day(year: u16) -> Option<Date> {
    // The first celebration was fixed by law on June 21st.
    if year == 2021 {
        return Date::from_ymd(2021, 6, 21).ok();
    }
    june_solstice_utc_minus_4(year)
}

fn reformation_day(year: u16) -> Option<Date> {
    let nominal = Date::from_ymd(year, 10, 31).ok()?;
    Some(match nominal.weekday() {
        Weekday::Tuesday => nominal - 4,
        Weekday::Wednesday => nominal + 2,
        _ => nominal,
    })
}
