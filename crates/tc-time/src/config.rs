//! Calendar build configuration.

use crate::date::Date;
use tc_core::errors::{Error, Result};

/// What a calendar does when asked about a date outside its built years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OutOfRangePolicy {
    /// Log a warning and answer from the weekend rule alone.
    #[default]
    Warn,
    /// Fail with [`Error::OutOfRange`].
    Error,
}

/// Settings used to build a [`Calendar`](crate::Calendar).
///
/// Built with `CalendarConfig::default()` and adjusted through the `with_*`
/// setters:
///
/// ```
/// use tc_time::{CalendarConfig, OutOfRangePolicy};
/// let config = CalendarConfig::default()
///     .with_years(2000, 2030)
///     .with_out_of_range(OutOfRangePolicy::Error);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalendarConfig {
    /// First year with holiday data.
    pub first_year: u16,
    /// Last year with holiday data.
    pub last_year: u16,
    /// Minimum number of years of holiday data required beyond the
    /// reference date before a build logs a warning.
    pub min_horizon_years: u16,
    /// Date the horizon is measured from; `None` means today.
    pub reference_date: Option<Date>,
    /// Behaviour for queries outside `[first_year, last_year]`.
    pub out_of_range: OutOfRangePolicy,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            first_year: 1990,
            last_year: 2050,
            min_horizon_years: 3,
            reference_date: None,
            out_of_range: OutOfRangePolicy::Warn,
        }
    }
}

impl CalendarConfig {
    /// Set the year span.
    pub fn with_years(mut self, first_year: u16, last_year: u16) -> Self {
        self.first_year = first_year;
        self.last_year = last_year;
        self
    }

    /// Set the minimum forward horizon.
    pub fn with_min_horizon_years(mut self, years: u16) -> Self {
        self.min_horizon_years = years;
        self
    }

    /// Measure the horizon from `date` instead of today.
    pub fn with_reference_date(mut self, date: Date) -> Self {
        self.reference_date = Some(date);
        self
    }

    /// Set the out-of-range policy.
    pub fn with_out_of_range(mut self, policy: OutOfRangePolicy) -> Self {
        self.out_of_range = policy;
        self
    }

    /// Check the year span.
    pub fn validate(&self) -> Result<()> {
        validate_years(self.first_year, self.last_year)
    }

    /// Resolve the reference date, falling back to today.
    pub fn reference_date(&self) -> Result<Date> {
        match self.reference_date {
            Some(d) => Ok(d),
            None => Date::today(),
        }
    }

    /// `true` if the configured span reaches less than `min_horizon_years`
    /// past the reference year.
    pub fn horizon_too_short(&self) -> Result<bool> {
        let reference_year = self.reference_date()?.year();
        Ok(u32::from(reference_year) + u32::from(self.min_horizon_years) > u32::from(self.last_year))
    }
}

pub(crate) fn validate_years(first_year: u16, last_year: u16) -> Result<()> {
    if first_year > last_year {
        return Err(Error::Configuration(format!(
            "first year {first_year} is after last year {last_year}"
        )));
    }
    if first_year < Date::MIN_YEAR || last_year > Date::MAX_YEAR {
        return Err(Error::Configuration(format!(
            "year span [{first_year}, {last_year}] outside supported range [{}, {}]",
            Date::MIN_YEAR,
            Date::MAX_YEAR
        )));
    }
    Ok(())
}
