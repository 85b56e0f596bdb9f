//! Movable-feast helpers shared by the country rule tables.

use crate::date::{days_in_month, Date};

/// Julian Day Number of the day before serial 1 (1899-12-31).
const JULIAN_DAY_OFFSET: i32 = 2_415_020;

/// Compute the day-of-year (1-based) for Easter Monday in `year`.
///
/// Uses Oudin's algorithm for the Gregorian Easter Sunday.
pub(crate) fn easter_monday(year: u16) -> u16 {
    let y = year as i32;
    // Oudin's algorithm for Easter Sunday (requires signed arithmetic)
    let g = y % 19;
    let c = y / 100;
    let h = (c - c / 4 - (8 * c + 13) / 25 + 19 * g + 15) % 30;
    let i = h - (h / 28) * (1 - (h / 28) * (29 / (h + 1)) * ((21 - g) / 11));
    let j = (y + y / 4 + i + 2 - c + c / 4) % 7;
    let p = i - j;
    let e_day = 1 + (p + 27 + (p + 6) / 40) % 31;
    let e_month = 3 + (p + 26) / 30;
    let mut doy = e_day as u16;
    for mon in 1..e_month {
        doy += days_in_month(year, mon as u8) as u16;
    }
    doy + 1 // Easter Monday = Easter Sunday + 1
}

/// Local (UTC-4) calendar date of the June solstice in `year`.
///
/// Mean-solstice polynomial from Meeus, *Astronomical Algorithms*, ch. 27;
/// good to a few minutes over 1000–3000 AD.
pub(crate) fn june_solstice_utc_minus_4(year: u16) -> Option<Date> {
    let t = (year as f64 - 2000.0) / 1000.0;
    let jde = 2_451_716.567_67 + 365_241.626_03 * t + 0.003_25 * t * t + 0.008_88 * t.powi(3)
        - 0.000_30 * t.powi(4);
    let jdn = (jde - 4.0 / 24.0 + 0.5).floor() as i32;
    Date::from_serial(jdn - JULIAN_DAY_OFFSET).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn easter_monday_known_years() {
        // Easter Sunday 2024: March 31
        assert_eq!(easter_monday(2024), date(2024, 4, 1).day_of_year());
        // Easter Sunday 2023: April 9
        assert_eq!(easter_monday(2023), date(2023, 4, 10).day_of_year());
        // Easter Sunday 2000: April 23
        assert_eq!(easter_monday(2000), date(2000, 4, 24).day_of_year());
    }

    #[test]
    fn june_solstice_dates() {
        assert_eq!(june_solstice_utc_minus_4(2022), Some(date(2022, 6, 21)));
        assert_eq!(june_solstice_utc_minus_4(2023), Some(date(2023, 6, 21)));
        assert_eq!(june_solstice_utc_minus_4(2024), Some(date(2024, 6, 20)));
        assert_eq!(june_solstice_utc_minus_4(2025), Some(date(2025, 6, 20)));
        assert_eq!(june_solstice_utc_minus_4(2026), Some(date(2026, 6, 21)));
    }
}
