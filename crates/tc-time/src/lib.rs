//! # tc-time
//!
//! Dates, holiday sources, trading calendars, and trading-day arithmetic.
//!
//! ```
//! use tc_time::{count_trading_days, is_trading_day, CalendarConfig, Calendars, Date};
//!
//! let cals = Calendars::standard(&CalendarConfig::default()).unwrap();
//! let chile = cals.chile_financial();
//! // Dec 31 is a bank holiday in Chile
//! assert!(!is_trading_day(Date::from_ymd(2024, 12, 31).unwrap(), chile));
//! let n = count_trading_days(
//!     Date::from_ymd(2024, 4, 26).unwrap(),
//!     Date::from_ymd(2024, 5, 6).unwrap(),
//!     chile,
//! )
//! .unwrap();
//! assert_eq!(n, 5);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Rolling conventions for non-trading days.
pub mod business_day_convention;

/// `Calendar` and the `Calendars` factory.
pub mod calendar;

/// Country / exchange holiday rules and source adapters.
pub mod calendars;

/// Calendar build configuration.
pub mod config;

/// `Date` type.
pub mod date;

/// `HolidaySource` trait, `CalendarId`, and the built-in rule source.
pub mod holiday_source;

/// Trading-day engine.
pub mod trading_days;

/// `Weekday` — day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use business_day_convention::BusinessDayConvention;
pub use calendar::{Calendar, Calendars};
pub use calendars::{BespokeHolidays, FinancialHolidays};
pub use config::{CalendarConfig, OutOfRangePolicy};
pub use date::Date;
pub use holiday_source::{default_source, CalendarId, HolidaySource, RuleBasedHolidays};
pub use trading_days::{
    add_trading_days, count_trading_days, is_trading_day, range_trading_days, TradingDayRange,
    TradingDays,
};
pub use weekday::Weekday;
