//! Trading-day arithmetic over a [`Calendar`].
//!
//! All operations are pure functions of their inputs and an immutable
//! calendar; they may run concurrently on a shared calendar.
//!
//! * [`is_trading_day`] — weekday and not a holiday.
//! * [`add_trading_days`] — step `n` trading days forward or backward.
//! * [`range_trading_days`] / [`TradingDayRange`] — materialised ascending
//!   sequences from two of `start`, `end`, `periods`.
//! * [`count_trading_days`] — trading-day steps from `start` to `end`.

use crate::calendar::Calendar;
use crate::date::Date;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use log::{debug, warn};
use tc_core::errors::{Error, Result};

/// Return `true` if `date` is a trading day in `calendar`.
///
/// Weekends are never trading days.  Dates outside the calendar's year span
/// are judged on the weekend rule alone and log a warning.
pub fn is_trading_day(date: Date, calendar: &Calendar) -> bool {
    if date.is_weekend() {
        return false;
    }
    !calendar.is_holiday(date)
}

/// Move `n` trading days away from `date`: forward when `n > 0`, backward
/// when `n < 0`.  The result is always a trading day.
///
/// `n == 0` returns `date` unchanged without checking it, and logs a warning
/// that it may not be a trading day.
///
/// ```
/// use tc_time::{add_trading_days, Calendars, CalendarConfig, Date};
/// let cals = Calendars::standard(&CalendarConfig::default()).unwrap();
/// let may_1 = Date::from_ymd(2023, 5, 1).unwrap();
/// let d = add_trading_days(may_1, 5, cals.chile_financial()).unwrap();
/// assert_eq!(d, Date::from_ymd(2023, 5, 8).unwrap());
/// ```
///
/// # Errors
/// [`Error::OutOfRange`] if the walk leaves the supported date range, or
/// leaves the calendar span under [`OutOfRangePolicy::Error`](crate::OutOfRangePolicy::Error).
pub fn add_trading_days(date: Date, n: i32, calendar: &Calendar) -> Result<Date> {
    if n == 0 {
        warn!("add_trading_days: zero offset, {date} returned as is and may be a holiday");
        return Ok(date);
    }
    calendar.check_span(date)?;
    let step = n.signum();
    let mut remaining = n.unsigned_abs();
    let mut d = date;
    while remaining > 0 {
        d = d.add_days(step)?;
        if calendar.is_open(d) {
            remaining -= 1;
        }
    }
    calendar.check_span(d)?;
    Ok(d)
}

/// Trading days described by two of `start`, `end`, and `periods`.
///
/// Shorthand for [`TradingDayRange`] with day-granularity inputs.
///
/// # Errors
/// [`Error::InvalidArgument`] unless exactly two of the three are given, or
/// if `end < start`.
pub fn range_trading_days(
    start: Option<Date>,
    end: Option<Date>,
    periods: Option<i32>,
    calendar: &Calendar,
) -> Result<Vec<Date>> {
    let mut range = TradingDayRange::new();
    if let Some(s) = start {
        range = range.start(s);
    }
    if let Some(e) = end {
        range = range.end(e);
    }
    if let Some(p) = periods {
        range = range.periods(p);
    }
    Ok(range.build(calendar)?.into_dates())
}

/// Number of trading-day steps from `start` to `end`:
/// `range_trading_days(start, end).len() - 1`.
///
/// `start` itself is not counted.  A window without any trading day yields
/// `-1`.
///
/// # Errors
/// [`Error::InvalidArgument`] if `end < start`.
pub fn count_trading_days(start: Date, end: Date, calendar: &Calendar) -> Result<i32> {
    let days = range_trading_days(Some(start), Some(end), None, calendar)?;
    let len = i32::try_from(days.len())
        .map_err(|_| Error::Runtime(format!("{} trading days overflow i32", days.len())))?;
    Ok(len - 1)
}

// ── Range builder ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Endpoint {
    date: Date,
    time: Option<NaiveTime>,
}

/// Builder for a materialised, ascending sequence of trading days.
///
/// Exactly two of `start`, `end`, and `periods` must be set:
///
/// * `start` + `periods ≥ 0` — the first `periods` trading days on or after
///   `start`.
/// * `end` + `periods ≥ 0` — the last `periods` trading days on or before
///   `end`.
/// * A negative `periods` swaps the direction: with `start` it walks back
///   from `start`, with `end` it walks forward from `end`, taking
///   `|periods|` days.
/// * `start` + `end` — every trading day in `[start, end]`.
///
/// Time of day never affects which days are selected.  With
/// `normalize(false)` the time of the anchoring endpoint (`start` if given,
/// else `end`) is carried onto every output date-time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TradingDayRange {
    start: Option<Endpoint>,
    end: Option<Endpoint>,
    periods: Option<i32>,
    normalize: bool,
}

impl Default for TradingDayRange {
    fn default() -> Self {
        Self::new()
    }
}

impl TradingDayRange {
    /// An empty builder with `normalize` on.
    pub fn new() -> Self {
        Self {
            start: None,
            end: None,
            periods: None,
            normalize: true,
        }
    }

    /// Set the start date.
    pub fn start(mut self, date: Date) -> Self {
        self.start = Some(Endpoint { date, time: None });
        self
    }

    /// Set the start from a date-time.
    pub fn start_at(mut self, at: NaiveDateTime) -> Result<Self> {
        self.start = Some(Endpoint {
            date: Date::from_datetime(at)?,
            time: Some(at.time()),
        });
        Ok(self)
    }

    /// Set the end date.
    pub fn end(mut self, date: Date) -> Self {
        self.end = Some(Endpoint { date, time: None });
        self
    }

    /// Set the end from a date-time.
    pub fn end_at(mut self, at: NaiveDateTime) -> Result<Self> {
        self.end = Some(Endpoint {
            date: Date::from_datetime(at)?,
            time: Some(at.time()),
        });
        Ok(self)
    }

    /// Set the number of trading days to generate.
    pub fn periods(mut self, periods: i32) -> Self {
        self.periods = Some(periods);
        self
    }

    /// Whether to drop the time of day from the output (default `true`).
    pub fn normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    /// Generate the trading days.
    pub fn build(self, calendar: &Calendar) -> Result<TradingDays> {
        let (dates, anchor) = match (self.start, self.end, self.periods) {
            (Some(s), Some(e), None) => (between(calendar, s.date, e.date)?, s),
            (Some(s), None, Some(p)) if p >= 0 => (walk(calendar, s.date, p.unsigned_abs(), 1)?, s),
            (Some(s), None, Some(p)) => (walk(calendar, s.date, p.unsigned_abs(), -1)?, s),
            (None, Some(e), Some(p)) if p >= 0 => (walk(calendar, e.date, p.unsigned_abs(), -1)?, e),
            (None, Some(e), Some(p)) => (walk(calendar, e.date, p.unsigned_abs(), 1)?, e),
            (start, end, periods) => {
                let given = [start.is_some(), end.is_some(), periods.is_some()]
                    .into_iter()
                    .filter(|&g| g)
                    .count();
                return Err(Error::InvalidArgument(format!(
                    "exactly two of start, end and periods must be given, got {given}"
                )));
            }
        };
        debug!("generated {} {} trading days", dates.len(), calendar.id());
        Ok(TradingDays {
            dates,
            time: if self.normalize { None } else { anchor.time },
        })
    }
}

fn between(calendar: &Calendar, start: Date, end: Date) -> Result<Vec<Date>> {
    if end < start {
        return Err(Error::InvalidArgument(format!(
            "end {end} is before start {start}"
        )));
    }
    calendar.check_span(start)?;
    calendar.check_span(end)?;
    let mut out = Vec::new();
    let mut d = start;
    loop {
        if calendar.is_open(d) {
            out.push(d);
        }
        if d == end {
            break;
        }
        d = d.add_days(1)?;
    }
    Ok(out)
}

/// Collect `count` trading days starting at `from` (inclusive), stepping by
/// `step`; the result is ascending either way.
fn walk(calendar: &Calendar, from: Date, count: u32, step: i32) -> Result<Vec<Date>> {
    calendar.check_span(from)?;
    let count = count as usize;
    // No more dates than remain before the end of the supported range
    let room = if step > 0 {
        from.days_between(Date::MAX)
    } else {
        Date::MIN.days_between(from)
    };
    let mut out = Vec::with_capacity(count.min(room as usize + 1));
    let mut d = from;
    while out.len() < count {
        if calendar.is_open(d) {
            out.push(d);
            if out.len() == count {
                break;
            }
        }
        d = d.add_days(step)?;
    }
    if let Some(&last) = out.last() {
        calendar.check_span(last)?;
    }
    if step < 0 {
        out.reverse();
    }
    Ok(out)
}

// ── Output ───────────────────────────────────────────────────────────────────

/// An ascending sequence of trading days produced by [`TradingDayRange`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TradingDays {
    dates: Vec<Date>,
    time: Option<NaiveTime>,
}

impl TradingDays {
    /// The trading days.
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// Consume into the underlying vector.
    pub fn into_dates(self) -> Vec<Date> {
        self.dates
    }

    /// Time of day carried onto the output, if not normalised.
    pub fn time_of_day(&self) -> Option<NaiveTime> {
        self.time
    }

    /// The trading days as date-times: midnight when normalised, otherwise
    /// the anchoring endpoint's time of day.
    pub fn datetimes(&self) -> Vec<NaiveDateTime> {
        let time = self.time.unwrap_or(NaiveTime::MIN);
        self.dates
            .iter()
            .map(|&d| NaiveDate::from(d).and_time(time))
            .collect()
    }

    /// Number of trading days.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// `true` if no trading day was generated.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Earliest trading day.
    pub fn first(&self) -> Option<Date> {
        self.dates.first().copied()
    }

    /// Latest trading day.
    pub fn last(&self) -> Option<Date> {
        self.dates.last().copied()
    }

    /// Iterate over the trading days.
    pub fn iter(&self) -> std::slice::Iter<'_, Date> {
        self.dates.iter()
    }
}

impl IntoIterator for TradingDays {
    type Item = Date;
    type IntoIter = std::vec::IntoIter<Date>;

    fn into_iter(self) -> Self::IntoIter {
        self.dates.into_iter()
    }
}

impl<'a> IntoIterator for &'a TradingDays {
    type Item = &'a Date;
    type IntoIter = std::slice::Iter<'a, Date>;

    fn into_iter(self) -> Self::IntoIter {
        self.dates.iter()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
