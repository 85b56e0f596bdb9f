//! `Calendar` — an immutable holiday set over a bounded year span.
//!
//! A calendar knows which dates are trading days and can adjust dates
//! according to a [`BusinessDayConvention`].  It is built once from a
//! [`HolidaySource`] and never mutated afterwards; rebuilding means
//! constructing a new value.  `Calendar` is `Send + Sync`, so one instance
//! (or an `Arc` of it) can be shared by every thread.

use crate::business_day_convention::BusinessDayConvention;
use crate::config::{validate_years, CalendarConfig, OutOfRangePolicy};
use crate::date::Date;
use crate::holiday_source::{default_source, CalendarId, HolidaySource};
use log::{debug, warn};
use std::collections::HashSet;
use tc_core::errors::{Error, Result};
use tc_core::timed;

/// A trading calendar: the weekend rule plus a frozen holiday set for
/// `[first_year, last_year]`.
#[derive(Debug, Clone)]
pub struct Calendar {
    id: CalendarId,
    first_year: u16,
    last_year: u16,
    first_day: Date,
    last_day: Date,
    holidays: HashSet<Date>,
    out_of_range: OutOfRangePolicy,
}

impl Calendar {
    /// Build a calendar for `id` over `[first_year, last_year]`, querying
    /// `source` once.
    ///
    /// Uses the default [`CalendarConfig`] for everything but the year span,
    /// so a span ending less than three years past today logs a warning.
    ///
    /// # Errors
    /// [`Error::Configuration`] if `first_year > last_year` or the span is
    /// outside the supported date range; any error raised by `source`.
    pub fn build(
        id: CalendarId,
        first_year: u16,
        last_year: u16,
        source: &dyn HolidaySource,
    ) -> Result<Self> {
        let config = CalendarConfig::default().with_years(first_year, last_year);
        Self::from_config(id, &config, source)
    }

    /// Build a calendar for `id` as described by `config`.
    pub fn from_config(
        id: CalendarId,
        config: &CalendarConfig,
        source: &dyn HolidaySource,
    ) -> Result<Self> {
        let (first_year, last_year) = (config.first_year, config.last_year);
        validate_years(first_year, last_year)?;

        let first_day = Date::from_ymd(first_year, 1, 1)?;
        let last_day = Date::from_ymd(last_year, 12, 31)?;
        let listed = source.list_holidays(id, first_year, last_year)?;
        let listed_count = listed.len();
        let holidays: HashSet<Date> = listed
            .into_iter()
            .filter(|d| (first_day..=last_day).contains(d))
            .collect();
        if holidays.len() != listed_count {
            debug!(
                "{id}: dropped {} holidays outside [{first_year}, {last_year}]",
                listed_count - holidays.len()
            );
        }

        if config.horizon_too_short()? {
            warn!(
                "{id}: holiday data only available up to {last_year}; \
                 extend the calendar's last year"
            );
        }
        debug!(
            "built {id} calendar for [{first_year}, {last_year}] with {} holidays",
            holidays.len()
        );

        Ok(Self {
            id,
            first_year,
            last_year,
            first_day,
            last_day,
            holidays,
            out_of_range: config.out_of_range,
        })
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Which holiday set this calendar uses.
    pub fn id(&self) -> CalendarId {
        self.id
    }

    /// Human-readable name (e.g. `"US (NYSE)"`).
    pub fn name(&self) -> &'static str {
        self.id.name()
    }

    /// First year covered.
    pub fn first_year(&self) -> u16 {
        self.first_year
    }

    /// Last year covered.
    pub fn last_year(&self) -> u16 {
        self.last_year
    }

    /// Out-of-span policy in force.
    pub fn out_of_range_policy(&self) -> OutOfRangePolicy {
        self.out_of_range
    }

    /// Number of holidays held (weekend holidays included).
    pub fn holiday_count(&self) -> usize {
        self.holidays.len()
    }

    /// All holidays, ascending.
    pub fn holidays(&self) -> Vec<Date> {
        let mut out: Vec<Date> = self.holidays.iter().copied().collect();
        out.sort_unstable();
        out
    }

    // ── Membership ───────────────────────────────────────────────────────────

    /// `true` if `date` lies within the built year span.
    pub fn covers(&self, date: Date) -> bool {
        (self.first_day..=self.last_day).contains(&date)
    }

    /// Fail with [`Error::OutOfRange`] unless `date` lies within the built
    /// year span, regardless of the configured policy.
    pub fn ensure_covers(&self, date: Date) -> Result<()> {
        if self.covers(date) {
            Ok(())
        } else {
            Err(self.out_of_span(date))
        }
    }

    /// Apply the out-of-range policy to `date`.
    pub(crate) fn check_span(&self, date: Date) -> Result<()> {
        if self.covers(date) {
            return Ok(());
        }
        match self.out_of_range {
            OutOfRangePolicy::Warn => {
                self.warn_out_of_span(date);
                Ok(())
            }
            OutOfRangePolicy::Error => Err(self.out_of_span(date)),
        }
    }

    fn out_of_span(&self, date: Date) -> Error {
        Error::OutOfRange(format!(
            "{date} is outside the {} calendar span [{}, {}]",
            self.id, self.first_year, self.last_year
        ))
    }

    fn warn_out_of_span(&self, date: Date) {
        warn!(
            "{date} is outside the {} calendar span [{}, {}]; holidays unknown, \
             only weekends are excluded",
            self.id, self.first_year, self.last_year
        );
    }

    /// `true` if `date` is a Saturday or Sunday.
    pub fn is_weekend(&self, date: Date) -> bool {
        date.is_weekend()
    }

    /// `true` if `date` is in the holiday set.
    ///
    /// Dates outside the built span are never holidays; such queries log a
    /// warning.
    pub fn is_holiday(&self, date: Date) -> bool {
        if !self.covers(date) {
            self.warn_out_of_span(date);
        }
        self.holidays.contains(&date)
    }

    /// `true` if `date` is neither a weekend nor a holiday.  No span check.
    pub(crate) fn is_open(&self, date: Date) -> bool {
        !date.is_weekend() && !self.holidays.contains(&date)
    }

    /// Holidays in `[from, to]`, ascending.  Weekend days are listed only
    /// when `include_weekends` is set.
    ///
    /// # Errors
    /// [`Error::OutOfRange`] if either end lies outside the built span under
    /// [`OutOfRangePolicy::Error`]; under `Warn` a warning is logged and only
    /// weekends are known beyond the span.
    pub fn holidays_between(
        &self,
        from: Date,
        to: Date,
        include_weekends: bool,
    ) -> Result<Vec<Date>> {
        self.check_span(from)?;
        self.check_span(to)?;
        let mut out = Vec::new();
        let mut d = from;
        while d <= to {
            let weekend = d.is_weekend();
            if (weekend && include_weekends) || (!weekend && self.holidays.contains(&d)) {
                out.push(d);
            }
            match d.add_days(1) {
                Ok(next) => d = next,
                Err(_) => break,
            }
        }
        Ok(out)
    }

    // ── Adjustment ───────────────────────────────────────────────────────────

    /// Adjust `date` according to the given business-day convention.
    pub fn adjust(&self, date: Date, convention: BusinessDayConvention) -> Result<Date> {
        self.check_span(date)?;
        self.adjust_unchecked(date, convention)
    }

    fn adjust_unchecked(&self, mut date: Date, convention: BusinessDayConvention) -> Result<Date> {
        match convention {
            BusinessDayConvention::Unadjusted => Ok(date),
            BusinessDayConvention::Following => {
                while !self.is_open(date) {
                    date = date.add_days(1)?;
                }
                Ok(date)
            }
            BusinessDayConvention::ModifiedFollowing => {
                let adjusted = self.adjust_unchecked(date, BusinessDayConvention::Following)?;
                if adjusted.month() != date.month() {
                    self.adjust_unchecked(date, BusinessDayConvention::Preceding)
                } else {
                    Ok(adjusted)
                }
            }
            BusinessDayConvention::Preceding => {
                while !self.is_open(date) {
                    date = date.add_days(-1)?;
                }
                Ok(date)
            }
            BusinessDayConvention::ModifiedPreceding => {
                let adjusted = self.adjust_unchecked(date, BusinessDayConvention::Preceding)?;
                if adjusted.month() != date.month() {
                    self.adjust_unchecked(date, BusinessDayConvention::Following)
                } else {
                    Ok(adjusted)
                }
            }
            BusinessDayConvention::Nearest => {
                if self.is_open(date) {
                    return Ok(date);
                }
                let fwd = self.adjust_unchecked(date, BusinessDayConvention::Following)?;
                let bwd = self.adjust_unchecked(date, BusinessDayConvention::Preceding)?;
                if fwd - date <= date - bwd {
                    Ok(fwd)
                } else {
                    Ok(bwd)
                }
            }
            BusinessDayConvention::EndOfMonth => {
                self.adjust_unchecked(date.end_of_month(), BusinessDayConvention::Preceding)
            }
        }
    }

    /// Return the last trading day of the month containing `date`.
    pub fn last_trading_day_of_month(&self, date: Date) -> Result<Date> {
        self.adjust(date, BusinessDayConvention::EndOfMonth)
    }
}

/// The standard calendars, built once and passed explicitly to callers.
#[derive(Debug, Clone)]
pub struct Calendars {
    chile_financial: Calendar,
    nyse: Calendar,
}

impl Calendars {
    /// Build the Chilean financial and NYSE calendars from the built-in
    /// rule tables.
    pub fn standard(config: &CalendarConfig) -> Result<Self> {
        Self::with_source(config, &default_source())
    }

    /// Build the standard calendars from a caller-supplied source.
    pub fn with_source(config: &CalendarConfig, source: &dyn HolidaySource) -> Result<Self> {
        timed("build standard calendars", || {
            Ok(Self {
                chile_financial: Calendar::from_config(CalendarId::ChileFinancial, config, source)?,
                nyse: Calendar::from_config(CalendarId::Nyse, config, source)?,
            })
        })
    }

    /// Chilean financial calendar (public holidays plus Dec 31).
    pub fn chile_financial(&self) -> &Calendar {
        &self.chile_financial
    }

    /// NYSE calendar.
    pub fn nyse(&self) -> &Calendar {
        &self.nyse
    }

    /// Look a calendar up by id.
    pub fn get(&self, id: CalendarId) -> Option<&Calendar> {
        match id {
            CalendarId::ChileFinancial => Some(&self.chile_financial),
            CalendarId::Nyse => Some(&self.nyse),
            _ => None,
        }
    }
}
