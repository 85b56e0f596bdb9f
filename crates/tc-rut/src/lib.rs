//! # tc-rut
//!
//! Chilean RUT numbers: check-digit computation, validation, dotted
//! formatting, and random generation for test fixtures.
//!
//! ```
//! use tc_rut::{format_rut, is_valid, Rut};
//!
//! assert!(is_valid("12.345.678-5"));
//! assert_eq!(format_rut("123456785").unwrap(), "12.345.678-5");
//! assert_eq!(Rut::from_body(12_345_670).to_string(), "12345670-K");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// `Rut` and the free validation / formatting helpers.
pub mod rut;

pub use rut::{
    format_rut, is_valid, random_valid, random_valid_default, verification_digit, Rut,
    DEFAULT_MAX_BODY, DEFAULT_MIN_BODY,
};
