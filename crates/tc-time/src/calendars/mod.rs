//! Country / exchange holiday rule tables and holiday-source adapters.

/// Bespoke (user-supplied) holiday table.
pub mod bespoke;

/// Chile public holidays.
pub mod chile;

pub(crate) mod easter;

/// Dec 31 bank-holiday decorator for the Chilean financial calendar.
pub mod financial;

/// NYSE holidays and special closings.
pub mod nyse;

pub use bespoke::BespokeHolidays;
pub use financial::FinancialHolidays;
