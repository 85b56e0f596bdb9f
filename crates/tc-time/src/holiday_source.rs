//! Holiday sources: where a [`Calendar`](crate::Calendar) gets its holidays.
//!
//! A [`HolidaySource`] answers "which dates are non-trading holidays for
//! this calendar over these years".  It is queried once per calendar build;
//! the resulting set is then frozen inside the calendar.

use crate::calendars::{chile, nyse, FinancialHolidays};
use crate::date::Date;
use std::collections::BTreeSet;
use tc_core::errors::{Error, Result};

/// Identifies which holiday set a calendar uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum CalendarId {
    /// Chilean public holidays.
    Chile,
    /// Chilean public holidays plus the Dec 31 bank holiday.
    ChileFinancial,
    /// New York Stock Exchange.
    Nyse,
    /// Saturdays and Sundays only, no holidays.
    WeekendsOnly,
}

impl CalendarId {
    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            CalendarId::Chile => "Chile",
            CalendarId::ChileFinancial => "Chile (financial)",
            CalendarId::Nyse => "US (NYSE)",
            CalendarId::WeekendsOnly => "Weekends Only",
        }
    }
}

impl std::fmt::Display for CalendarId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A provider of raw holiday dates.
pub trait HolidaySource: std::fmt::Debug + Send + Sync {
    /// Return every holiday of calendar `id` whose year lies in
    /// `[first_year, last_year]`.
    ///
    /// Holidays that fall on a weekend may be included; the calendar applies
    /// the weekend rule independently.
    fn list_holidays(&self, id: CalendarId, first_year: u16, last_year: u16) -> Result<BTreeSet<Date>>;
}

impl<S: HolidaySource + ?Sized> HolidaySource for &S {
    fn list_holidays(&self, id: CalendarId, first_year: u16, last_year: u16) -> Result<BTreeSet<Date>> {
        (**self).list_holidays(id, first_year, last_year)
    }
}

impl<S: HolidaySource + ?Sized> HolidaySource for Box<S> {
    fn list_holidays(&self, id: CalendarId, first_year: u16, last_year: u16) -> Result<BTreeSet<Date>> {
        (**self).list_holidays(id, first_year, last_year)
    }
}

/// Holiday source computed from the built-in rule tables.
///
/// Answers [`CalendarId::Chile`], [`CalendarId::Nyse`], and
/// [`CalendarId::WeekendsOnly`].  [`CalendarId::ChileFinancial`] needs the
/// [`FinancialHolidays`] decorator; see [`default_source`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBasedHolidays;

impl HolidaySource for RuleBasedHolidays {
    fn list_holidays(&self, id: CalendarId, first_year: u16, last_year: u16) -> Result<BTreeSet<Date>> {
        let rule: fn(Date) -> bool = match id {
            CalendarId::Chile => chile::is_holiday,
            CalendarId::Nyse => nyse::is_holiday,
            CalendarId::WeekendsOnly => return Ok(BTreeSet::new()),
            CalendarId::ChileFinancial => {
                return Err(Error::InvalidArgument(format!(
                    "{id} is not a rule table; wrap the source in FinancialHolidays"
                )))
            }
        };
        let mut holidays = BTreeSet::new();
        if first_year > last_year {
            return Ok(holidays);
        }
        let mut d = Date::from_ymd(first_year, 1, 1)?;
        let end = Date::from_ymd(last_year, 12, 31)?;
        while d <= end {
            if rule(d) {
                holidays.insert(d);
            }
            if d == end {
                break;
            }
            d += 1;
        }
        Ok(holidays)
    }
}

/// The built-in rule tables with the Chilean financial decorator applied.
pub fn default_source() -> FinancialHolidays<RuleBasedHolidays> {
    FinancialHolidays::new(RuleBasedHolidays)
}
