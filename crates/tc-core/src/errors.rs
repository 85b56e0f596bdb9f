//! Error types for tradecal.
//!
//! Every fallible operation in the workspace returns the single
//! `thiserror`-derived [`Error`] enum below.  The [`ensure!`](crate::ensure)
//! and [`fail!`](crate::fail) macros cover the common "check and bail" cases.

use thiserror::Error;

/// The top-level error type used throughout tradecal.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// General runtime error (raised by `fail!`).
    #[error("{0}")]
    Runtime(String),

    /// Precondition violated (raised by `ensure!`).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Invalid calendar configuration, e.g. an inverted year range.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Invalid argument combination passed to an operation.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A date fell outside the span a calendar (or the date type) covers.
    #[error("out of range: {0}")]
    OutOfRange(String),

    /// Date-related error.
    #[error("date error: {0}")]
    Date(String),

    /// Malformed textual input.
    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand `Result` type used throughout tradecal.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use tc_core::{ensure, errors::Error};
/// fn positive(x: i32) -> tc_core::errors::Result<i32> {
///     ensure!(x > 0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1).is_ok());
/// assert!(matches!(positive(-1), Err(Error::Precondition(_))));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Return `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use tc_core::{fail, errors::Error};
/// fn always_err() -> tc_core::errors::Result<()> {
///     fail!("something went wrong");
/// }
/// assert_eq!(always_err(), Err(Error::Runtime("something went wrong".into())));
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}
