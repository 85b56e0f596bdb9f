//! # tc-core
//!
//! Core building blocks shared across the tradecal workspace: the error
//! hierarchy with its `ensure!` / `fail!` macros, small string-cleanup
//! helpers, and wall-clock timing instrumentation.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

/// Whitespace and punctuation cleanup.
pub mod text;

/// `Stopwatch` and `timed` helpers.
pub mod timing;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use timing::{timed, Stopwatch};
