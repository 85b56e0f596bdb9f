//! New York Stock Exchange holiday rules.

use super::easter::easter_monday;
use crate::date::Date;
use crate::weekday::Weekday;

/// Return `true` if the NYSE is closed for a holiday on `date`.
///
/// Holidays:
/// * New Year's Day (Jan 1; if Sun → Mon; not moved back when on a Saturday)
/// * Martin Luther King Jr. Day (3rd Mon in Jan, from 1998)
/// * Washington's Birthday (3rd Mon in Feb)
/// * Good Friday
/// * Memorial Day (last Mon in May)
/// * Juneteenth (Jun 19, from 2022; if Sun → Mon; if Sat → Fri)
/// * Independence Day (Jul 4; if Sun → Mon; if Sat → Fri)
/// * Labor Day (1st Mon in Sep)
/// * Thanksgiving Day (4th Thu in Nov)
/// * Christmas Day (Dec 25; if Sun → Mon; if Sat → Fri)
/// * Special closings (national days of mourning, 9/11, Hurricane Sandy)
///
/// Columbus Day and Veterans' Day are bank holidays only; the exchange
/// trades on both.
pub fn is_holiday(date: Date) -> bool {
    let w = date.weekday();
    let y = date.year();
    let m = date.month();
    let d = date.day_of_month();
    let dd = date.day_of_year();
    let em = easter_monday(y);

    // New Year's Day (possibly moved to Monday if on Sunday)
    if (d == 1 && m == 1) || (d == 2 && m == 1 && w == Weekday::Monday) {
        return true;
    }
    // MLK Day (3rd Monday of January, since 1998 for NYSE)
    if y >= 1998 && m == 1 && w == Weekday::Monday && (15..=21).contains(&d) {
        return true;
    }
    // Washington's Birthday (3rd Monday of February)
    if m == 2 && w == Weekday::Monday && (15..=21).contains(&d) {
        return true;
    }
    // Good Friday
    if dd == em - 3 {
        return true;
    }
    // Memorial Day (last Monday of May)
    if m == 5 && w == Weekday::Monday && d >= 25 {
        return true;
    }
    // Juneteenth (June 19, from 2022)
    if y >= 2022
        && m == 6
        && (d == 19
            || (d == 20 && w == Weekday::Monday)
            || (d == 18 && w == Weekday::Friday))
    {
        return true;
    }
    // Independence Day (July 4)
    if (d == 4 && m == 7)
        || (d == 5 && m == 7 && w == Weekday::Monday)
        || (d == 3 && m == 7 && w == Weekday::Friday)
    {
        return true;
    }
    // Labor Day (1st Monday of September)
    if m == 9 && w == Weekday::Monday && d <= 7 {
        return true;
    }
    // Thanksgiving (4th Thursday of November)
    if m == 11 && w == Weekday::Thursday && (22..=28).contains(&d) {
        return true;
    }
    // Christmas (December 25)
    if (d == 25 && m == 12)
        || (d == 26 && m == 12 && w == Weekday::Monday)
        || (d == 24 && m == 12 && w == Weekday::Friday)
    {
        return true;
    }
    is_special_closing(y, m, d)
}

fn is_special_closing(y: u16, m: u8, d: u8) -> bool {
    matches!(
        (y, m, d),
        // President Carter's funeral (2025)
        (2025, 1, 9)
        // President George H.W. Bush's funeral (2018)
        | (2018, 12, 5)
        // Hurricane Sandy (2012)
        | (2012, 10, 29) | (2012, 10, 30)
        // President Ford's funeral (2007)
        | (2007, 1, 2)
        // President Reagan's funeral (2004)
        | (2004, 6, 11)
        // September 11, 2001
        | (2001, 9, 11) | (2001, 9, 12) | (2001, 9, 13) | (2001, 9, 14)
        // President Nixon's funeral (1994)
        | (1994, 4, 27)
        // Hurricane Gloria (1985)
        | (1985, 9, 27)
    )
}
