//! # tradecal
//!
//! Trading-day calendars for the Chilean financial system and the NYSE,
//! together with Chilean RUT utilities.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates. Application code should depend on this
//! crate rather than on the individual `tc-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use tradecal::time::{add_trading_days, CalendarConfig, Calendars, Date};
//!
//! let cals = Calendars::standard(&CalendarConfig::default()).unwrap();
//! let next = add_trading_days(Date::from_ymd(2024, 12, 30).unwrap(), 1, cals.chile_financial())
//!     .unwrap();
//! assert_eq!(next, Date::from_ymd(2025, 1, 2).unwrap());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error type, string cleanup, and timing helpers.
pub use tc_core as core;

/// Dates, holiday sources, calendars, and the trading-day engine.
pub use tc_time as time;

/// Chilean RUT validation, formatting, and generation.
pub use tc_rut as rut;

pub use tc_core::{Error, Result};
pub use tc_time::{
    add_trading_days, count_trading_days, is_trading_day, range_trading_days, Calendar,
    CalendarConfig, CalendarId, Calendars, Date,
};
