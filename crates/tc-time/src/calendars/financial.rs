//! Financial-calendar decorator: adds the Chilean bank holiday on Dec 31.

use crate::date::Date;
use crate::holiday_source::{CalendarId, HolidaySource};
use std::collections::BTreeSet;
use tc_core::errors::Result;

/// Wraps a holiday source and answers [`CalendarId::ChileFinancial`] as the
/// inner source's [`CalendarId::Chile`] set plus December 31st of every
/// year in range.
///
/// Every other calendar id is delegated to the inner source untouched.
#[derive(Debug, Clone, Default)]
pub struct FinancialHolidays<S> {
    inner: S,
}

impl<S: HolidaySource> FinancialHolidays<S> {
    /// Wrap `inner`.
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    /// The wrapped source.
    pub fn inner(&self) -> &S {
        &self.inner
    }
}

impl<S: HolidaySource> HolidaySource for FinancialHolidays<S> {
    fn list_holidays(&self, id: CalendarId, first_year: u16, last_year: u16) -> Result<BTreeSet<Date>> {
        if id != CalendarId::ChileFinancial {
            return self.inner.list_holidays(id, first_year, last_year);
        }
        let mut holidays = self.inner.list_holidays(CalendarId::Chile, first_year, last_year)?;
        for year in first_year..=last_year {
            holidays.insert(Date::from_ymd(year, 12, 31)?);
        }
        Ok(holidays)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendars::bespoke::BespokeHolidays;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn adds_new_years_eve_to_chile() {
        let base: BespokeHolidays = [date(2024, 5, 1)].into_iter().collect();
        let source = FinancialHolidays::new(base);
        let listed = source
            .list_holidays(CalendarId::ChileFinancial, 2023, 2024)
            .unwrap();
        assert_eq!(
            listed.into_iter().collect::<Vec<_>>(),
            vec![date(2023, 12, 31), date(2024, 5, 1), date(2024, 12, 31)]
        );
    }

    #[test]
    fn other_calendars_pass_through() {
        let base: BespokeHolidays = [date(2024, 7, 4)].into_iter().collect();
        let source = FinancialHolidays::new(base);
        let listed = source.list_holidays(CalendarId::Nyse, 2024, 2024).unwrap();
        assert!(!listed.contains(&date(2024, 12, 31)));
        assert!(listed.contains(&date(2024, 7, 4)));
    }
}
