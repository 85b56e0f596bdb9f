//! Bespoke holiday source — a table of user-defined holidays.

use crate::date::Date;
use crate::holiday_source::{CalendarId, HolidaySource};
use std::collections::{BTreeSet, HashSet};
use tc_core::errors::Result;

/// A holiday source backed by an explicit table of dates.
///
/// The same table answers every [`CalendarId`]; use one instance per
/// calendar.  Useful for static data loaded from a file or for injecting
/// ad-hoc closures in tests.
#[derive(Debug, Clone, Default)]
pub struct BespokeHolidays {
    holidays: HashSet<Date>,
}

impl BespokeHolidays {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a holiday.  Weekends are already non-trading days.
    pub fn add_holiday(&mut self, date: Date) {
        self.holidays.insert(date);
    }

    /// Remove a previously added holiday.
    pub fn remove_holiday(&mut self, date: Date) {
        self.holidays.remove(&date);
    }

    /// Return the number of explicitly-added holidays.
    pub fn holiday_count(&self) -> usize {
        self.holidays.len()
    }
}

impl FromIterator<Date> for BespokeHolidays {
    fn from_iter<I: IntoIterator<Item = Date>>(iter: I) -> Self {
        Self {
            holidays: iter.into_iter().collect(),
        }
    }
}

impl HolidaySource for BespokeHolidays {
    fn list_holidays(&self, _id: CalendarId, first_year: u16, last_year: u16) -> Result<BTreeSet<Date>> {
        Ok(self
            .holidays
            .iter()
            .copied()
            .filter(|d| (first_year..=last_year).contains(&d.year()))
            .collect())
    }
}
